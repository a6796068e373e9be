use spendbook_domain::Category;

use crate::CoreError;

pub struct CategoryService;

impl CategoryService {
    /// Appends a category, rejecting blank names and names already in use.
    pub fn add(categories: &mut Vec<Category>, name: &str) -> Result<Category, CoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("category name cannot be empty".into()));
        }
        if Self::find(categories, trimmed).is_some() {
            return Err(CoreError::DuplicateCategory(trimmed.to_string()));
        }
        let category = Category::new(trimmed);
        categories.push(category.clone());
        Ok(category)
    }

    pub fn find<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        categories.iter().find(|category| category.matches(name))
    }

    pub fn names(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(|category| category.name.as_str()).collect()
    }
}

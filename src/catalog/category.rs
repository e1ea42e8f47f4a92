//! Fixed category catalogue offered by the category selector.

/// Label shown for the empty (unconstrained) category choice.
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Laptops,
    Cameras,
    Audio,
    Gaming,
    Smartphones,
    Tablets,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Laptops,
        Category::Cameras,
        Category::Audio,
        Category::Gaming,
        Category::Smartphones,
        Category::Tablets,
        Category::Accessories,
    ];

    /// Identifier sent to the backend.
    pub fn id(self) -> &'static str {
        match self {
            Category::Laptops => "laptops",
            Category::Cameras => "cameras",
            Category::Audio => "audio",
            Category::Gaming => "gaming",
            Category::Smartphones => "smartphones",
            Category::Tablets => "tablets",
            Category::Accessories => "accessories",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Laptops => "Laptops",
            Category::Cameras => "Cameras",
            Category::Audio => "Audio Equipment",
            Category::Gaming => "Gaming",
            Category::Smartphones => "Smartphones",
            Category::Tablets => "Tablets",
            Category::Accessories => "Accessories",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

/// Display label for a raw category value.
///
/// Unknown ids are shown as-is; the empty value means "all".
pub fn category_label(id: &str) -> &str {
    if id.is_empty() {
        return ALL_CATEGORIES_LABEL;
    }
    Category::from_id(id).map(Category::label).unwrap_or(id)
}

/// Next selector value after `current`, wrapping through "all" (empty).
pub fn next_category_id(current: &str) -> &'static str {
    let position = Category::from_id(current).and_then(|c| Category::ALL.iter().position(|x| *x == c));
    match position {
        None if current.is_empty() => Category::ALL[0].id(),
        None => "",
        Some(i) if i + 1 == Category::ALL.len() => "",
        Some(i) => Category::ALL[i + 1].id(),
    }
}

/// Previous selector value before `current`, wrapping through "all" (empty).
pub fn prev_category_id(current: &str) -> &'static str {
    let position = Category::from_id(current).and_then(|c| Category::ALL.iter().position(|x| *x == c));
    match position {
        None if current.is_empty() => Category::ALL[Category::ALL.len() - 1].id(),
        None => "",
        Some(0) => "",
        Some(i) => Category::ALL[i - 1].id(),
    }
}

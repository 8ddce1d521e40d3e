/// A ranked search suggestion: a title token and how many catalog titles contain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub title: String,
    pub count: usize,
}

impl Suggestion {
    pub fn new(title: impl Into<String>, count: usize) -> Self {
        Self {
            title: title.into(),
            count,
        }
    }
}

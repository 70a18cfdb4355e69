#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateEvent {
    pub title: Option<String>,
}

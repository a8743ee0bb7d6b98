#[derive(Debug, Clone)]
pub enum Action {
    AbortFetch,
}

#[derive(Debug)]
pub struct Suggestion {
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub prompt: String,
    /// Word that starts a variable declaration.
    pub keyword: String,
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self{prompt: "> ".into(), keyword: "let".into(), banner: true}
    }
}

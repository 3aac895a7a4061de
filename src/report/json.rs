use serde::Serialize;

pub fn render_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyList<'a> {
    pub scope: &'a str,
    pub keys: Vec<&'a str>,
}

use serde::Deserialize;

/// Lists arrive either bare or wrapped as `{ "data": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Envelope<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(default = "Vec::new")]
        data: Vec<T>,
    },
}

impl<T> Envelope<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Envelope::Bare(v) => v,
            Envelope::Wrapped { data } => data,
        }
    }
}

use std::collections::HashMap;

/// Where `env:"true"` fields look up their variables.
///
/// `Vars` takes an iterator so tests can pass synthetic data instead of
/// mutating the process environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EnvSource {
    #[default]
    Process,
    Vars(HashMap<String, String>),
}

impl EnvSource {
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        EnvSource::Vars(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Look up a variable by its exact name. A variable that is set to the
    /// empty string is still present.
    pub fn lookup(&self, name: &str) -> Option<String> {
        match self {
            EnvSource::Process => std::env::var(name).ok(),
            EnvSource::Vars(vars) => vars.get(name).cloned(),
        }
    }
}

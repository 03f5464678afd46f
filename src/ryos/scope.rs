//! Permission scopes a caller can request during login. The catalog is closed:
//! every grant the identity service understands is a [`Scope`] variant.

use serde::Serialize;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Identity,
}

impl Scope {
    pub const ALL: [Self; 1] = [Self::Identity];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Identity => {
                "Access to the user's identity information, including username, account ID, and account age."
            }
        }
    }

    #[must_use]
    pub const fn descriptor(self) -> ScopeDescriptor {
        ScopeDescriptor {
            name: self.name(),
            description: self.description(),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.name() == name)
            .ok_or_else(|| name.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

static CATALOG: [ScopeDescriptor; 1] = [Scope::Identity.descriptor()];

/// The scope catalog, in fixed order.
#[must_use]
pub fn catalog() -> &'static [ScopeDescriptor] {
    &CATALOG
}

/// Resolves requested scope names against the catalog.
///
/// # Errors
/// Returns every name that is not in the catalog, in request order.
pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Vec<Scope>, Vec<String>> {
    let mut scopes = Vec::with_capacity(names.len());
    let mut unknown = Vec::new();

    for name in names {
        match name.as_ref().parse::<Scope>() {
            Ok(scope) => scopes.push(scope),
            Err(name) => unknown.push(name),
        }
    }

    if unknown.is_empty() {
        Ok(scopes)
    } else {
        Err(unknown)
    }
}

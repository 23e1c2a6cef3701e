use crate::host::Role;

/// Markup problems that prevent a drawer root from being bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// A required structural part is absent under the root.
    MissingPart { root: String, role: Role },
    /// The node handed to the binder is not a drawer root.
    NotADrawer { root: String },
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindError::MissingPart { root, role } => {
                write!(f, "drawer '{root}' has no [data-role={role}] element")
            }
            BindError::NotADrawer { root } => {
                write!(f, "'{root}' is not marked [data-role=drawer]")
            }
        }
    }
}

impl std::error::Error for BindError {}

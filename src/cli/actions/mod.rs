pub mod auth;
pub mod check;
pub mod logout;
pub mod scopes;
pub mod validate;

// Internal "interpreter" for `Action`.
mod run;

#[derive(Debug)]
pub enum Action {
    Auth(auth::Args),
    Check(check::Args),
    Validate(validate::Args),
    Scopes(scopes::Args),
    Logout(logout::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}

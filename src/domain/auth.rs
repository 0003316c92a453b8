use serde::{Deserialize, Serialize};

/// Body of `POST /authenticate`. The server answers by mailing a magic link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInBody {
    pub email: String,
}

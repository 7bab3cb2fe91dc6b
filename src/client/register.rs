// src/client/register.rs
use serde::{Deserialize, Serialize};

use crate::client::api::Registrar;

pub const DASHBOARD_ROUTE: &str = "/dashboard";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Redirect(&'static str),
}

/// State behind the registration page: controlled form fields plus the
/// error messages from the last failed submit.
#[derive(Debug, Clone, Default)]
pub struct RegisterView {
    form: RegisterForm,
    form_errors: Vec<String>,
}

impl RegisterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &RegisterForm {
        &self.form
    }

    pub fn form_errors(&self) -> &[String] {
        &self.form_errors
    }

    /// Updates the field called `name`. Unknown names are ignored.
    pub fn handle_change(&mut self, name: &str, value: &str) {
        match name {
            "username" => self.form.username = value.to_string(),
            "password" => self.form.password = value.to_string(),
            _ => {}
        }
    }

    pub async fn handle_submit(&mut self, registrar: &dyn Registrar) -> Navigation {
        let result = registrar.register(&self.form).await;
        if result.success {
            Navigation::Redirect(DASHBOARD_ROUTE)
        } else {
            self.form_errors = result.errors;
            Navigation::Stay
        }
    }
}

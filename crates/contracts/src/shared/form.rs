//! Жизненный цикл модальной формы создания/редактирования.
//!
//! ```text
//! Editing --begin_submit(ok)--> Saving --succeed--> Saved
//!    ^   \--begin_submit(errors)--/ |
//!    +-------------fail-------------+
//! ```

use crate::shared::validation::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Saving,
    Saved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLifecycle {
    mode: FormMode,
    phase: FormPhase,
    errors: ValidationErrors,
    server_error: Option<String>,
}

impl FormLifecycle {
    pub fn create() -> Self {
        Self::with_mode(FormMode::Create)
    }

    pub fn edit(id: impl Into<String>) -> Self {
        Self::with_mode(FormMode::Edit { id: id.into() })
    }

    /// `Some(id)` opens in edit mode
    pub fn for_record(id: Option<&str>) -> Self {
        match id {
            Some(id) => Self::edit(id),
            None => Self::create(),
        }
    }

    fn with_mode(mode: FormMode) -> Self {
        Self {
            mode,
            phase: FormPhase::Editing,
            errors: ValidationErrors::new(),
            server_error: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_create(&self) -> bool {
        self.mode == FormMode::Create
    }

    pub fn edit_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Edit { id } => Some(id),
            FormMode::Create => None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_saving(&self) -> bool {
        self.phase == FormPhase::Saving
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }

    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    /// Локальная проверка перед отправкой. При `true` можно вызывать API.
    /// Повторная отправка во время сохранения отклоняется.
    pub fn begin_submit<F: Validate>(&mut self, form: &F) -> bool {
        if self.phase != FormPhase::Editing {
            return false;
        }
        self.server_error = None;
        match form.validate().into_result() {
            Ok(()) => {
                self.errors = ValidationErrors::new();
                self.phase = FormPhase::Saving;
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// Ошибка API: форма остаётся открытой для повторной попытки
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = FormPhase::Editing;
        self.server_error = Some(message.into());
    }

    pub fn succeed(&mut self) {
        self.phase = FormPhase::Saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::required;

    struct NameForm(&'static str);

    impl Validate for NameForm {
        fn validate(&self) -> ValidationErrors {
            let mut errors = ValidationErrors::new();
            required(&mut errors, "name", self.0);
            errors
        }
    }

    #[test]
    fn test_modes() {
        assert!(FormLifecycle::create().is_create());
        let edit = FormLifecycle::for_record(Some("c-1"));
        assert_eq!(edit.edit_id(), Some("c-1"));
        assert!(FormLifecycle::for_record(None).is_create());
    }

    #[test]
    fn test_invalid_form_blocks_submit() {
        let mut form = FormLifecycle::create();
        assert!(!form.begin_submit(&NameForm("")));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.field_error("name").is_some());
    }

    #[test]
    fn test_failure_keeps_form_open() {
        let mut form = FormLifecycle::edit("c-1");
        assert!(form.begin_submit(&NameForm("An")));
        assert!(form.is_saving());
        assert!(!form.begin_submit(&NameForm("An")));

        form.fail("Máy chủ lỗi");
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.server_error(), Some("Máy chủ lỗi"));

        assert!(form.begin_submit(&NameForm("An")));
        assert_eq!(form.server_error(), None);
        form.succeed();
        assert_eq!(form.phase(), FormPhase::Saved);
    }

    #[test]
    fn test_errors_cleared_on_valid_resubmit() {
        let mut form = FormLifecycle::create();
        form.begin_submit(&NameForm(""));
        assert!(form.begin_submit(&NameForm("Bình")));
        assert!(form.errors().is_empty());
    }
}

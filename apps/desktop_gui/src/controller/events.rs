//! UI events and error modeling for the desktop surface.

use shared::{
    domain::{LayerId, Mode},
    error::ViewError,
};

/// One discrete user interaction. Widgets queue these while a frame renders;
/// the reducer applies them in order once the frame is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    SetMode(Mode),
    SelectLayer(LayerId),
    ClosePanel,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::SetMode(_) => "set_mode",
            UiEvent::SelectLayer(_) => "select_layer",
            UiEvent::ClosePanel => "close_panel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Startup,
    SelectLayer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        category: UiErrorCategory,
        context: UiErrorContext,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    pub fn from_view_error(context: UiErrorContext, err: &ViewError) -> Self {
        match err {
            ViewError::UnknownLayer(_) => {
                Self::new(UiErrorCategory::Validation, context, err.to_string())
            }
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status line text, e.g. "Validation: unknown layer 'attic'".
    pub fn status_line(&self) -> String {
        let label = match self.category {
            UiErrorCategory::Validation => "Validation",
            UiErrorCategory::Config => "Configuration",
        };
        format!("{label}: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_layer_is_a_validation_error() {
        let err = UiError::from_view_error(
            UiErrorContext::SelectLayer,
            &ViewError::UnknownLayer("attic".to_string()),
        );
        assert_eq!(err.category(), UiErrorCategory::Validation);
        assert_eq!(err.context(), UiErrorContext::SelectLayer);
        assert_eq!(err.message(), "unknown layer 'attic'");
        assert_eq!(err.status_line(), "Validation: unknown layer 'attic'");
    }

    #[test]
    fn event_names_are_stable() {
        assert_eq!(UiEvent::SetMode(Mode::Target).name(), "set_mode");
        assert_eq!(UiEvent::SelectLayer(LayerId("safety")).name(), "select_layer");
        assert_eq!(UiEvent::ClosePanel.name(), "close_panel");
    }
}

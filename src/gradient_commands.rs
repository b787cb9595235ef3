use crate::api_types::{GenerateRequest, GenerateResponse, ValidationResult};
use crate::errors::{to_command_result, AppResult};
use crate::form::GradientForm;
use crate::settings::load_settings;
use crate::AppState;

/// Build form fields from a request. Colors must be valid hex; opacities are
/// clamped and default to opaque.
pub fn form_from_request(request: &GenerateRequest) -> AppResult<GradientForm> {
    let mut form = GradientForm::default();
    form.set_message(request.message.clone());
    form.set_start_color(&request.start_color)?;
    form.set_end_color(&request.end_color)?;
    if let Some(opacity) = request.start_opacity {
        form.set_start_opacity(opacity);
    }
    if let Some(opacity) = request.end_opacity {
        form.set_end_opacity(opacity);
    }
    Ok(form)
}

pub fn generate_gradient_code(
    state: &AppState,
    request: GenerateRequest,
) -> Result<GenerateResponse, String> {
    let settings = load_settings(&state.data_dir);
    let form = to_command_result(form_from_request(&request))?;
    let report = form.validation();

    Ok(GenerateResponse {
        code: form.code(),
        usable: report.is_valid(),
        validation: ValidationResult::from_report(&report, settings.language),
    })
}

pub fn validate_message(state: &AppState, message: String) -> Result<ValidationResult, String> {
    let settings = load_settings(&state.data_dir);
    let form = GradientForm {
        message,
        ..GradientForm::default()
    };
    Ok(ValidationResult::from_report(
        &form.validation(),
        settings.language,
    ))
}

/// Code for the copy action; refused while the message is invalid.
pub fn copy_gradient_code(request: GenerateRequest) -> Result<String, String> {
    to_command_result(form_from_request(&request).and_then(|form| form.copyable_code()))
}

use skumatch_core::PipelineError;

pub fn render_error(error: &PipelineError) -> String {
    let mut lines = vec![
        "The command could not complete.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
        String::new(),
        "What to do next:".to_string(),
    ];

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use skumatch_core::PipelineError;

    use super::render_error;

    #[test]
    fn renders_standard_error_layout() {
        let error = PipelineError::invalid_argument_with_recovery(
            "bad input",
            vec!["run skumatch --help".to_string()],
        );

        let rendered = render_error(&error);
        assert!(rendered.starts_with("The command could not complete."));
        assert!(rendered.contains("  Error:    invalid_argument"));
        assert!(rendered.contains("  Details:  bad input"));
        assert!(rendered.contains("What to do next:"));
        assert!(rendered.contains("  1. run skumatch --help"));
    }

    #[test]
    fn missing_recovery_steps_fall_back_to_a_retry_hint() {
        let error = PipelineError::new("internal_serialization_error", "boom", Vec::new());
        let rendered = render_error(&error);
        assert!(rendered.contains("  1. Retry the command."));
    }
}

use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::NormalizeData;
use crate::error::PipelineResult;
use crate::matching::normalize::{Normalizer, is_alphabetic_only, is_only_alphanumeric};

pub fn run(text: String) -> PipelineResult<SuccessEnvelope> {
    let normalizer = Normalizer::new()?;
    let clean_name = normalizer.clean(&text);

    let data = NormalizeData {
        clean_name_alphanum: normalizer.alphanumeric_only(&clean_name),
        clean_name_non_formula: normalizer.non_formula_prefix(&clean_name),
        clean_name_formula: normalizer.formula(&clean_name),
        is_only_alphanumeric: is_only_alphanumeric(&text),
        is_alphabetic_only: is_alphabetic_only(&text),
        clean_name,
        raw: text,
    };

    SuccessEnvelope::for_command("normalize", data)
}

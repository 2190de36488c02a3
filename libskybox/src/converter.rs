use crate::error::ConverterError;

/// Method for scaling a grid coordinate by the face size.
pub fn scale_u32(value: u32, factor: u32) -> Result<u32, ConverterError> {
    match value.checked_mul(factor) {
        None => Err(ConverterError::Overflow { value, factor }),
        Some(result) => Ok(result),
    }
}

/// Method for converting a duration to whole milliseconds.
pub fn duration_to_millis(value: std::time::Duration) -> Result<u64, ConverterError> {
    match u64::try_from(value.as_millis()) {
        Err(error) => Err(ConverterError::TryFromIntError(error)),
        Ok(result) => Ok(result),
    }
}

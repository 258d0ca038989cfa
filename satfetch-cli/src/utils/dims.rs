use crate::error::AppError;

/// Function to parse an image size given as "WIDTHxHEIGHT"
pub fn parse_dimensions(size_str: &str) -> Result<(u32, u32), AppError> {
    // Trim whitespace and handle case-insensitivity ("256X256")
    let size_str = size_str.trim().to_lowercase();

    if size_str.is_empty() {
        return Err(AppError::ParseError(
            "Invalid format: empty string".to_string(),
        ));
    }

    let Some((width_part, height_part)) = size_str.split_once('x') else {
        return Err(AppError::ParseError(format!(
            "Invalid size format: '{size_str}' (expected WIDTHxHEIGHT)"
        )));
    };

    let width = width_part
        .trim()
        .parse::<u32>()
        .map_err(|_| AppError::ParseError(format!("Invalid width: '{width_part}'")))?;
    let height = height_part
        .trim()
        .parse::<u32>()
        .map_err(|_| AppError::ParseError(format!("Invalid height: '{height_part}'")))?;

    if width == 0 || height == 0 {
        return Err(AppError::ParseError(
            "Image dimensions must be non-zero".to_string(),
        ));
    }

    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_sizes() {
        assert_eq!(parse_dimensions("256x256").unwrap(), (256, 256));
        assert_eq!(parse_dimensions("640x480").unwrap(), (640, 480));
        assert_eq!(parse_dimensions(" 512X512 ").unwrap(), (512, 512));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_dimensions("").is_err());
        assert!(parse_dimensions("256").is_err());
        assert!(parse_dimensions("x256").is_err());
        assert!(parse_dimensions("256x").is_err());
        assert!(parse_dimensions("axb").is_err());
        assert!(parse_dimensions("0x256").is_err());
        assert!(parse_dimensions("-1x256").is_err());
    }
}

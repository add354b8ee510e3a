use anyhow::anyhow;

use crate::error::{AddCode, Result};

pub fn required_string(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(anyhow!("{field} must not be empty").code(400));
    }
    Ok(())
}

pub fn positive_int(field: &str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(anyhow!("{field} must be a positive integer").code(400));
    }
    Ok(())
}

pub fn positive_number(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(anyhow!("{field} must be a positive number").code(400));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_string_is_rejected() {
        assert!(required_string("name", "").is_err());
        assert!(required_string("name", " ").is_ok());
        assert!(required_string("name", "Printer").is_ok());
    }

    #[test]
    fn quantity_must_be_strictly_positive() {
        assert!(positive_int("quantity", 0).is_err());
        assert!(positive_int("quantity", -3).is_err());
        assert!(positive_int("quantity", 1).is_ok());
    }

    #[test]
    fn price_must_be_finite_and_positive() {
        assert!(positive_number("price", 0.0).is_err());
        assert!(positive_number("price", -1.5).is_err());
        assert!(positive_number("price", f64::NAN).is_err());
        assert!(positive_number("price", f64::INFINITY).is_err());
        assert!(positive_number("price", 25000.50).is_ok());
    }
}

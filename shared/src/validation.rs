//! Validation utilities for the Saree Business Management Platform
//!
//! Includes India-specific checks (mobile numbers, GSTIN) used by the
//! client register UI.

// ============================================================================
// Catalog Validations
// ============================================================================

/// Validate that a required text field is non-blank after trimming
pub fn validate_required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Value is required");
    }
    Ok(())
}

/// Case-insensitive product-code equality, applied after trimming
pub fn codes_collide(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Validate a purchase/order quantity is positive
pub fn validate_positive_quantity(quantity: u32) -> Result<(), &'static str> {
    if quantity == 0 {
        return Err("Quantity must be a positive number");
    }
    Ok(())
}

// ============================================================================
// India-Specific Validations
// ============================================================================

/// Validate an Indian mobile number
/// Accepts: 9876543210, 98765-43210, +919876543210
pub fn validate_mobile(mobile: &str) -> Result<(), &'static str> {
    let digits: String = mobile.chars().filter(|c| c.is_ascii_digit()).collect();

    // Standard mobile: 10 digits starting with 6-9
    if digits.len() == 10 && digits.starts_with(['6', '7', '8', '9']) {
        return Ok(());
    }
    // International format with country code: 12 digits starting with 91
    if digits.len() == 12 && digits.starts_with("91") {
        return Ok(());
    }

    Err("Invalid Indian mobile number format")
}

/// Validate a GSTIN (Goods and Services Tax Identification Number)
/// Format: 2-digit state code, 10-character PAN, entity digit, 'Z', check character
pub fn validate_gstin(gstin: &str) -> Result<(), &'static str> {
    let chars: Vec<char> = gstin.chars().collect();

    if chars.len() != 15 {
        return Err("GSTIN must be 15 characters");
    }
    if !chars[0].is_ascii_digit() || !chars[1].is_ascii_digit() {
        return Err("GSTIN must start with a 2-digit state code");
    }
    // PAN segment: 5 letters, 4 digits, 1 letter
    if !chars[2..7].iter().all(|c| c.is_ascii_uppercase()) {
        return Err("Invalid PAN segment in GSTIN");
    }
    if !chars[7..11].iter().all(|c| c.is_ascii_digit()) {
        return Err("Invalid PAN segment in GSTIN");
    }
    if !chars[11].is_ascii_uppercase() {
        return Err("Invalid PAN segment in GSTIN");
    }
    if !chars[12].is_ascii_alphanumeric() {
        return Err("Invalid entity code in GSTIN");
    }
    if chars[13] != 'Z' {
        return Err("GSTIN must carry 'Z' in position 14");
    }
    if !chars[14].is_ascii_alphanumeric() {
        return Err("Invalid check character in GSTIN");
    }

    Ok(())
}

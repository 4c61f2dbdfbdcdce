use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const FAST_PAY: &str = "FastPay";
pub const SECURE_PAY: &str = "SecurePay";

/// Amounts at or above this value go to SecurePay.
pub const SECURE_PAY_THRESHOLD: Decimal = dec!(100);

/// Every provider name `select_provider_name` can return.
pub const POLICY_PROVIDERS: [&str; 2] = [FAST_PAY, SECURE_PAY];

/// Maps a (non-negative) amount to the name of the provider that must handle it.
pub fn select_provider_name(amount: Decimal) -> &'static str {
    if amount < SECURE_PAY_THRESHOLD {
        FAST_PAY
    } else {
        SECURE_PAY
    }
}

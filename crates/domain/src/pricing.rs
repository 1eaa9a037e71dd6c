// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Price aggregation.
//!
//! This module combines a nightly room rate, optional add-on services and a
//! tax schedule into a subtotal/tax/total breakdown.
//!
//! Amounts are carried at full precision. Rounding to cents happens only
//! when an amount is formatted for display.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Rejects negative and non-finite amounts.
fn ensure_amount(field: &str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::NegativeAmount {
            field: field.to_string(),
            value,
        })
    }
}

/// A single priced component of a booking.
///
/// A line item is either a room-night charge or an add-on service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display label (e.g. "Deluxe room", "Massage 60 min").
    pub label: String,
    /// Price of one unit. Never negative.
    pub unit_price: f64,
    /// Number of units.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a new line item.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NegativeAmount` if `unit_price` is negative or
    /// not a finite number.
    pub fn new(
        label: impl Into<String>,
        unit_price: f64,
        quantity: u32,
    ) -> Result<Self, DomainError> {
        let label: String = label.into();
        ensure_amount(&label, unit_price)?;
        Ok(Self {
            label,
            unit_price,
            quantity,
        })
    }

    /// Creates the room-night line for a stay.
    ///
    /// # Errors
    ///
    /// Returns an error if the nightly rate is negative or not finite.
    pub fn room_nights(
        label: impl Into<String>,
        nightly_rate: f64,
        nights: u32,
    ) -> Result<Self, DomainError> {
        Self::new(label, nightly_rate, nights)
    }

    /// Returns `unit_price * quantity`.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// A named tax rate, expressed as a fraction (`0.05` for 5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    /// The tax name as printed on a receipt.
    pub name: String,
    /// The rate as a fraction of the subtotal.
    pub rate: f64,
}

impl TaxRate {
    /// Creates a new tax rate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTaxRate` if the rate is negative or not finite.
    pub fn new(name: impl Into<String>, rate: f64) -> Result<Self, DomainError> {
        let name: String = name.into();
        if !rate.is_finite() || rate < 0.0 {
            return Err(DomainError::InvalidTaxRate { name, rate });
        }
        Ok(Self { name, rate })
    }
}

/// An ordered set of taxes applied independently to a subtotal.
///
/// Taxes never compound: each one is computed on the pre-tax subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSchedule {
    rates: Vec<TaxRate>,
}

impl TaxSchedule {
    /// Federal goods and services tax rate.
    pub const TPS_RATE: f64 = 0.05;
    /// Provincial sales tax rate.
    pub const TVQ_RATE: f64 = 0.099_75;

    /// Creates a schedule from a list of rates.
    #[must_use]
    pub const fn new(rates: Vec<TaxRate>) -> Self {
        Self { rates }
    }

    /// A schedule with no taxes.
    #[must_use]
    pub const fn exempt() -> Self {
        Self { rates: Vec::new() }
    }

    /// The hotel's jurisdiction: TPS 5% and TVQ 9.975%.
    #[must_use]
    pub fn quebec() -> Self {
        Self {
            rates: vec![
                TaxRate {
                    name: String::from("TPS"),
                    rate: Self::TPS_RATE,
                },
                TaxRate {
                    name: String::from("TVQ"),
                    rate: Self::TVQ_RATE,
                },
            ],
        }
    }

    /// Returns the rates in application order.
    #[must_use]
    pub fn rates(&self) -> &[TaxRate] {
        &self.rates
    }

    /// Sum of all rates, as a fraction.
    #[must_use]
    pub fn combined_rate(&self) -> f64 {
        self.rates.iter().map(|tax| tax.rate).sum()
    }
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self::quebec()
    }
}

/// One computed tax line of a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxLine {
    /// The tax name.
    pub name: String,
    /// The rate that was applied.
    pub rate: f64,
    /// `subtotal * rate`, unrounded.
    pub amount: f64,
}

/// The result of price aggregation.
///
/// Invariants:
/// - `total == subtotal + sum(taxes.amount)`
/// - each `tax.amount == subtotal * tax.rate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Sum of all line items, before tax.
    pub subtotal: f64,
    /// One entry per scheduled tax.
    pub taxes: Vec<TaxLine>,
    /// Subtotal plus all taxes.
    pub total: f64,
}

impl PriceBreakdown {
    /// Applies a tax schedule to a pre-tax subtotal.
    #[must_use]
    pub fn from_subtotal(subtotal: f64, schedule: &TaxSchedule) -> Self {
        let taxes: Vec<TaxLine> = schedule
            .rates()
            .iter()
            .map(|tax| TaxLine {
                name: tax.name.clone(),
                rate: tax.rate,
                amount: subtotal * tax.rate,
            })
            .collect();
        let tax_total: f64 = taxes.iter().map(|line| line.amount).sum();

        Self {
            subtotal,
            taxes,
            total: subtotal + tax_total,
        }
    }

    /// Sum of all tax amounts.
    #[must_use]
    pub fn tax_total(&self) -> f64 {
        self.taxes.iter().map(|line| line.amount).sum()
    }

    /// Looks up a tax line by name.
    #[must_use]
    pub fn tax(&self, name: &str) -> Option<&TaxLine> {
        self.taxes.iter().find(|line| line.name == name)
    }
}

/// Sums a list of line items.
///
/// # Errors
///
/// Returns an error if any item carries a negative or non-finite unit price.
pub fn subtotal_of(items: &[LineItem]) -> Result<f64, DomainError> {
    items.iter().try_fold(0.0_f64, |acc, item| {
        ensure_amount(&item.label, item.unit_price)?;
        Ok(acc + item.amount())
    })
}

/// Computes the price breakdown for a stay with optional add-ons.
///
/// `subtotal = nightly_rate * nights + sum(add_on.unit_price * add_on.quantity)`,
/// then every tax in `schedule` is applied to that subtotal.
///
/// # Arguments
///
/// * `nightly_rate` - Room price per night
/// * `nights` - Number of nights (`0` when dates are not yet chosen)
/// * `add_ons` - Selected add-on services
/// * `schedule` - Taxes to apply
///
/// # Errors
///
/// Returns `DomainError::NegativeAmount` if the nightly rate or any add-on
/// unit price is negative or not a finite number.
pub fn aggregate(
    nightly_rate: f64,
    nights: u32,
    add_ons: &[LineItem],
    schedule: &TaxSchedule,
) -> Result<PriceBreakdown, DomainError> {
    ensure_amount("nightly_rate", nightly_rate)?;

    let room_amount: f64 = nightly_rate * f64::from(nights);
    let add_on_amount: f64 = subtotal_of(add_ons)?;

    Ok(PriceBreakdown::from_subtotal(
        room_amount + add_on_amount,
        schedule,
    ))
}

/// Rounds an amount to cents, half away from zero.
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Formats an amount with exactly two decimals (`"689.85"`).
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", round_to_cents(amount))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_room_only_scenario() {
        let breakdown: PriceBreakdown = aggregate(200.0, 3, &[], &TaxSchedule::quebec()).unwrap();

        assert!(approx(breakdown.subtotal, 600.0));
        assert_eq!(format_amount(breakdown.tax("TPS").unwrap().amount), "30.00");
        assert_eq!(format_amount(breakdown.tax("TVQ").unwrap().amount), "59.85");
        assert_eq!(format_amount(breakdown.total), "689.85");
    }

    #[test]
    fn test_zero_nights_is_zero_total() {
        let breakdown: PriceBreakdown = aggregate(200.0, 0, &[], &TaxSchedule::quebec()).unwrap();

        assert_eq!(breakdown.subtotal, 0.0);
        assert_eq!(breakdown.total, 0.0);
        assert!(breakdown.taxes.iter().all(|line| line.amount == 0.0));
    }

    #[test]
    fn test_add_ons_are_part_of_subtotal() {
        let add_ons: Vec<LineItem> = vec![
            LineItem::new("Breakfast", 25.0, 4).unwrap(),
            LineItem::new("Parking", 15.5, 2).unwrap(),
        ];
        let breakdown: PriceBreakdown =
            aggregate(150.0, 2, &add_ons, &TaxSchedule::quebec()).unwrap();

        assert!(approx(breakdown.subtotal, 300.0 + 100.0 + 31.0));
    }

    #[test]
    fn test_taxes_do_not_compound() {
        let breakdown: PriceBreakdown = aggregate(100.0, 1, &[], &TaxSchedule::quebec()).unwrap();

        let tps: &TaxLine = breakdown.tax("TPS").unwrap();
        let tvq: &TaxLine = breakdown.tax("TVQ").unwrap();
        assert!(approx(tps.amount, 100.0 * 0.05));
        assert!(approx(tvq.amount, 100.0 * 0.099_75));
    }

    #[test]
    fn test_total_invariant_holds() {
        let schedule: TaxSchedule = TaxSchedule::quebec();
        for rate in [0.0, 0.01, 89.99, 149.5, 1234.56] {
            for nights in [0_u32, 1, 2, 7, 30] {
                let add_ons: Vec<LineItem> =
                    vec![LineItem::new("Spa", 79.99, nights % 3).unwrap()];
                let b: PriceBreakdown = aggregate(rate, nights, &add_ons, &schedule).unwrap();

                assert!(approx(b.total, b.subtotal + b.tax_total()));
                for line in &b.taxes {
                    assert!(approx(line.amount, b.subtotal * line.rate));
                }
            }
        }
    }

    #[test]
    fn test_rejects_negative_nightly_rate() {
        let result = aggregate(-1.0, 2, &[], &TaxSchedule::quebec());
        assert!(matches!(result, Err(DomainError::NegativeAmount { .. })));
    }

    #[test]
    fn test_rejects_non_finite_nightly_rate() {
        let result = aggregate(f64::NAN, 2, &[], &TaxSchedule::quebec());
        assert!(matches!(result, Err(DomainError::NegativeAmount { .. })));
    }

    #[test]
    fn test_rejects_negative_add_on_price() {
        assert!(LineItem::new("Refund", -5.0, 1).is_err());

        // Struct literals bypass the constructor, aggregation still checks.
        let sneaky: LineItem = LineItem {
            label: String::from("Refund"),
            unit_price: -5.0,
            quantity: 1,
        };
        let result = aggregate(100.0, 1, &[sneaky], &TaxSchedule::quebec());
        assert_eq!(
            result,
            Err(DomainError::NegativeAmount {
                field: String::from("Refund"),
                value: -5.0,
            })
        );
    }

    #[test]
    fn test_exempt_schedule() {
        let breakdown: PriceBreakdown = aggregate(120.0, 2, &[], &TaxSchedule::exempt()).unwrap();
        assert!(breakdown.taxes.is_empty());
        assert_eq!(breakdown.total, breakdown.subtotal);
    }

    #[test]
    fn test_combined_rate() {
        assert!(approx(TaxSchedule::quebec().combined_rate(), 0.149_75));
    }

    #[test]
    fn test_tax_rate_rejects_negative() {
        assert!(TaxRate::new("Bogus", -0.1).is_err());
        assert!(TaxRate::new("Lodging", 0.035).is_ok());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(59.849_999_999), "59.85");
        assert_eq!(format_amount(12.346), "12.35");
        assert_eq!(format_amount(1000.0), "1000.00");
    }
}

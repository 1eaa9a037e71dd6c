// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use auberge_api::{HotelApiClient, ReviewsPage};
use auberge_domain::{
    AvailabilityGate, GateDecision, LineItem, PriceBreakdown, RoomType, RoomTypeAvailability,
    StayRange, TaxSchedule, aggregate, format_amount,
};
use color_eyre::Result;
use tracing::{debug, info};

/// Parses an add-on given as `LABEL:PRICE[:QUANTITY]`.
pub fn parse_add_on(raw: &str) -> Result<LineItem, String> {
    let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
    let (label, price, quantity) = match parts.as_slice() {
        [label, price] => (*label, *price, "1"),
        [label, price, quantity] => (*label, *price, *quantity),
        _ => return Err(format!("'{raw}' is not LABEL:PRICE[:QUANTITY]")),
    };
    if label.is_empty() {
        return Err(String::from("add-on label must not be empty"));
    }
    let price: f64 = price
        .parse()
        .map_err(|e| format!("invalid price '{price}': {e}"))?;
    let quantity: u32 = quantity
        .parse()
        .map_err(|e| format!("invalid quantity '{quantity}': {e}"))?;

    LineItem::new(label, price, quantity).map_err(|e| e.to_string())
}

fn print_breakdown(breakdown: &PriceBreakdown) {
    println!("{:<24}{:>12}", "Subtotal", format_amount(breakdown.subtotal));
    for tax in &breakdown.taxes {
        println!("{:<24}{:>12}", tax.name, format_amount(tax.amount));
    }
    println!("{:<24}{:>12}", "Total", format_amount(breakdown.total));
}

/// Prices a stay without contacting the backend.
pub fn quote(
    check_in: &str,
    check_out: &str,
    rate: f64,
    add_ons: &[LineItem],
    tax_exempt: bool,
) -> Result<()> {
    let stay: StayRange = StayRange::parse(check_in, check_out)?;
    let schedule: TaxSchedule = if tax_exempt {
        TaxSchedule::exempt()
    } else {
        TaxSchedule::quebec()
    };

    let breakdown: PriceBreakdown = aggregate(rate, stay.nights(), add_ons, &schedule)?;
    debug!(nights = stay.nights(), total = breakdown.total, "Quote computed");

    println!(
        "{} night(s) at {} from {} to {}",
        stay.nights(),
        format_amount(rate),
        stay.check_in(),
        stay.check_out()
    );
    for item in add_ons {
        println!(
            "  {} x{}{:>12}",
            item.label,
            item.quantity,
            format_amount(item.amount())
        );
    }
    print_breakdown(&breakdown);
    Ok(())
}

/// Lists the room type catalogue.
pub async fn rooms(client: &HotelApiClient) -> Result<()> {
    let room_types: Vec<RoomType> = client.room_types().await?;
    info!(count = room_types.len(), "Room types loaded");

    for room in &room_types {
        println!(
            "{:<12}{:<28}{:>10}  up to {} guest(s)",
            room.code,
            room.name,
            format_amount(room.nightly_rate),
            room.capacity
        );
    }
    Ok(())
}

fn describe(decision: &GateDecision) -> String {
    let mut line: String = format!("{:<12}{:<12}", decision.room_type, decision.tier.as_str());
    if let Some(remaining) = decision.remaining {
        line.push_str(&format!(" {remaining} left"));
    }
    if let (Some(rate), Some(band)) = (decision.occupancy_rate, decision.occupancy_band) {
        line.push_str(&format!(" ({rate:.0}% {})", band.label()));
    }
    if decision.is_degraded() {
        line.push_str(" [stale]");
    }
    line
}

/// Shows the availability gate decision per room type for a stay.
pub async fn availability(
    client: &HotelApiClient,
    check_in: &str,
    check_out: &str,
    room_type: Option<&str>,
) -> Result<()> {
    let stay: StayRange = StayRange::parse(check_in, check_out)?;
    let records: Vec<RoomTypeAvailability> = client.availability(&stay).await?;
    let gate: AvailabilityGate = AvailabilityGate::new();

    let codes: Vec<String> = match room_type {
        Some(code) => vec![code.to_string()],
        None => records.iter().map(|r| r.room_type().to_string()).collect(),
    };

    for code in &codes {
        let decision: GateDecision = gate.evaluate(code, &records);
        println!("{}", describe(&decision));
    }
    Ok(())
}

/// Lists guest reviews with the average rating.
pub async fn reviews(client: &HotelApiClient) -> Result<()> {
    let page: ReviewsPage = client.reviews().await?;

    if page.stats.count == 0 {
        println!("No reviews yet");
        return Ok(());
    }
    println!(
        "{:.1}/5 from {} review(s)",
        page.stats.average, page.stats.count
    );
    for review in &page.reviews {
        println!(
            "{} {} ({} found helpful): {}",
            "*".repeat(usize::from(review.rating)),
            review.author,
            review.helpful_count,
            review.comment
        );
    }
    Ok(())
}

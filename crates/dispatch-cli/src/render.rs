//! Render - ボード状態のプレーンテキスト表示

use std::fmt::Write as _;

use dispatch_core::app::Notice;
use dispatch_core::domain::{DeliveryCounts, DeliveryRecord, DeliveryStatus, DriverProfile};

/// `list`・`today`・`upcoming` で使う 1 行の要約
pub fn record_line(record: &DeliveryRecord) -> String {
    format!(
        "{}  {} {}  {:<12} {}, {}  [{}]  {}",
        record.id,
        record.scheduled_date,
        record.scheduled_time,
        record.status.label(),
        record.customer_name,
        record.locality(),
        record.container_size.label(),
        record.driver_name,
    )
}

pub fn record_list(heading: &str, records: &[DeliveryRecord]) -> String {
    let mut out = format!("{heading} ({})\n", records.len());
    if records.is_empty() {
        out.push_str("  (none)\n");
    }
    for record in records {
        let _ = writeln!(out, "  {}", record_line(record));
    }
    out
}

pub fn details(record: &DeliveryRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Delivery {}", record.id);
    let _ = writeln!(out, "  Customer:  {}", record.customer_name);
    let _ = writeln!(out, "  Address:   {}, {}", record.address, record.locality());
    let _ = writeln!(
        out,
        "  Container: {} ({})",
        record.container_size.label(),
        record.delivery_type.label()
    );
    let _ = writeln!(
        out,
        "  When:      {} {}",
        record.scheduled_date, record.scheduled_time
    );
    let _ = writeln!(out, "  Driver:    {} ({})", record.driver_name, record.driver_id);
    let _ = writeln!(out, "  Status:    {}", record.status.label());
    if let Some(notes) = &record.special_instructions {
        let _ = writeln!(out, "  Notes:     {notes}");
    }
    out
}

pub fn stats(counts: &DeliveryCounts) -> String {
    let mut out = format!("Total: {}\n", counts.total);
    for status in DeliveryStatus::ALL {
        let _ = writeln!(out, "  {:<12} {}", status.label(), counts.get(status));
    }
    out
}

/// ドライバープロフィール画面
pub fn profile(profile: &DriverProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", profile.name);
    let _ = writeln!(out, "  Employee ID:  {}", profile.employee_id);
    let _ = writeln!(out, "  Home base:    {}", profile.home_base);
    let _ = writeln!(out, "  Phone:        {}", profile.phone);
    let _ = writeln!(out, "  Email:        {}", profile.email);
    let _ = writeln!(out, "  License:      Class {}", profile.license_class);
    let _ = writeln!(out, "  Experience:   {} years", profile.years_experience);
    let _ = writeln!(out, "  Deliveries:   {}", thousands(profile.total_deliveries));
    let _ = writeln!(out, "  On time:      {:.1}%", profile.on_time_rate);
    let _ = writeln!(out, "  Safety:       {}", profile.safety_rating);
    out
}

fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn notice(notice: &Notice) -> String {
    format!("[{}] {}\n", notice.title, notice.message)
}

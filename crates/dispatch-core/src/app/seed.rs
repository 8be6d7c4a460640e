//! Seed - 各セッションの初期モックデータ

use crate::domain::workflow;
use crate::domain::{
    ContainerSize, DeliveryRecord, DeliveryStatus, DeliveryType, NewDelivery, ScheduleDate,
    ValidationError, find_driver,
};
use crate::ports::IdGenerator;

/// モックデータの基準日（"today"）
pub const MOCK_TODAY: ScheduleDate = ScheduleDate::new(2024, 1, 15);

struct SeedRow {
    customer_name: &'static str,
    address: &'static str,
    city: &'static str,
    province: &'static str,
    container_size: ContainerSize,
    delivery_type: DeliveryType,
    date: &'static str,
    time: &'static str,
    status: DeliveryStatus,
    special_instructions: Option<&'static str>,
    driver_id: &'static str,
}

const ROWS: [SeedRow; 4] = [
    SeedRow {
        customer_name: "Kingston Industrial Supply",
        address: "123 Industrial Blvd",
        city: "Kingston",
        province: "ON",
        container_size: ContainerSize::Forty,
        delivery_type: DeliveryType::Sales,
        date: "2024-01-15",
        time: "09:00",
        status: DeliveryStatus::Scheduled,
        special_instructions: Some("Use loading dock B. Contact supervisor on arrival."),
        driver_id: "driver1",
    },
    SeedRow {
        customer_name: "Ottawa Logistics Center",
        address: "456 Commerce Way",
        city: "Ottawa",
        province: "ON",
        container_size: ContainerSize::Twenty,
        delivery_type: DeliveryType::Rental,
        date: "2024-01-15",
        time: "14:30",
        status: DeliveryStatus::EnRoute,
        special_instructions: Some("Call 30 minutes before arrival."),
        driver_id: "driver1",
    },
    SeedRow {
        customer_name: "Syracuse Distribution",
        address: "789 Warehouse Dr",
        city: "Syracuse",
        province: "NY",
        container_size: ContainerSize::Forty,
        delivery_type: DeliveryType::Rental,
        date: "2024-01-16",
        time: "11:00",
        status: DeliveryStatus::Scheduled,
        special_instructions: None,
        driver_id: "driver2",
    },
    SeedRow {
        customer_name: "Brockville Manufacturing",
        address: "321 Factory St",
        city: "Brockville",
        province: "ON",
        container_size: ContainerSize::Twenty,
        delivery_type: DeliveryType::Sales,
        date: "2024-01-16",
        time: "08:00",
        status: DeliveryStatus::Delivered,
        special_instructions: Some("Completed delivery - signed by J. Smith"),
        driver_id: "driver3",
    },
];

/// `id_gen` の新しい ID でモックレコードを作る
///
/// 各行は通常の登録ルールを通ってから保存用の status を設定されるので、
/// 追加後に更新されたレコードと見分けがつきません。
pub fn mock_records(id_gen: &impl IdGenerator) -> Result<Vec<DeliveryRecord>, ValidationError> {
    ROWS.iter()
        .map(|row| {
            let mut input = NewDelivery {
                customer_name: row.customer_name.to_string(),
                address: row.address.to_string(),
                city: row.city.to_string(),
                province: row.province.to_string(),
                container_size: row.container_size,
                delivery_type: row.delivery_type,
                scheduled_date: row.date.to_string(),
                scheduled_time: row.time.to_string(),
                special_instructions: row.special_instructions.map(str::to_string),
                ..NewDelivery::default()
            };
            if let Some(driver) = find_driver(row.driver_id) {
                input.assign_driver(driver);
            } else {
                input.driver_id = row.driver_id.to_string();
            }

            let mut record = workflow::admit(id_gen.generate_delivery_id(), input)?;
            workflow::apply_status(&mut record, row.status);
            Ok(record)
        })
        .collect()
}

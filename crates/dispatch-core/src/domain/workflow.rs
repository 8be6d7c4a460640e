//! Workflow - 配達追加の検証と status 更新
//!
//! 検証は必須項目を決まった順に調べて最初の空欄だけを報告し、その後に日付・時刻の
//! パターン、州コードを調べます。レコードはすべての検査を通った入力からだけ作られます。

use std::fmt;

use tracing::debug;

use super::delivery::{DeliveryRecord, NewDelivery};
use super::errors::ValidationError;
use super::ids::{DeliveryId, DriverId};
use super::roster::is_known_province;
use super::schedule::{ScheduleDate, ScheduleTime};
use super::status::DeliveryStatus;

/// RequiredField は登録前に空であってはならない項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    CustomerName,
    Address,
    City,
    ScheduledDate,
    ScheduledTime,
    DriverId,
}

impl RequiredField {
    /// 検査する順番
    pub const ORDER: [RequiredField; 6] = [
        RequiredField::CustomerName,
        RequiredField::Address,
        RequiredField::City,
        RequiredField::ScheduledDate,
        RequiredField::ScheduledTime,
        RequiredField::DriverId,
    ];

    /// シリアライズされた入力でのキー（`"customerName"`）
    pub fn name(self) -> &'static str {
        match self {
            RequiredField::CustomerName => "customerName",
            RequiredField::Address => "address",
            RequiredField::City => "city",
            RequiredField::ScheduledDate => "scheduledDate",
            RequiredField::ScheduledTime => "scheduledTime",
            RequiredField::DriverId => "driverId",
        }
    }

    /// メッセージ用の語（`"customer name"`）
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::CustomerName => "customer name",
            RequiredField::Address => "address",
            RequiredField::City => "city",
            RequiredField::ScheduledDate => "scheduled date",
            RequiredField::ScheduledTime => "scheduled time",
            RequiredField::DriverId => "driver id",
        }
    }

    fn value_in(self, input: &NewDelivery) -> &str {
        match self {
            RequiredField::CustomerName => &input.customer_name,
            RequiredField::Address => &input.address,
            RequiredField::City => &input.city,
            RequiredField::ScheduledDate => &input.scheduled_date,
            RequiredField::ScheduledTime => &input.scheduled_time,
            RequiredField::DriverId => &input.driver_id,
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `input` を検査し、パース済みの予定日時を返す
pub fn validate(input: &NewDelivery) -> Result<(ScheduleDate, ScheduleTime), ValidationError> {
    if let Some(field) = RequiredField::ORDER
        .into_iter()
        .find(|field| field.value_in(input).is_empty())
    {
        return Err(ValidationError::MissingField(field));
    }

    let date = ScheduleDate::parse(&input.scheduled_date)?;
    let time = ScheduleTime::parse(&input.scheduled_time)?;
    if !is_known_province(&input.province) {
        return Err(ValidationError::UnknownProvince(input.province.clone()));
    }
    Ok((date, time))
}

/// `input` から `id` のレコードを作る
///
/// 入力に status があっても捨てます。登録された配達は常に `Scheduled` です。
pub fn admit(id: DeliveryId, input: NewDelivery) -> Result<DeliveryRecord, ValidationError> {
    let (scheduled_date, scheduled_time) = validate(&input)?;

    if let Some(requested) = input.status
        && requested != DeliveryStatus::Scheduled
    {
        debug!(%id, %requested, "ignoring requested status on new delivery");
    }

    Ok(DeliveryRecord {
        id,
        customer_name: input.customer_name,
        address: input.address,
        city: input.city,
        province: input.province,
        container_size: input.container_size,
        delivery_type: input.delivery_type,
        scheduled_date,
        scheduled_time,
        status: DeliveryStatus::Scheduled,
        special_instructions: input.special_instructions,
        driver_id: DriverId::new(input.driver_id),
        driver_name: input.driver_name,
    })
}

/// `record` に新しい status を設定し、以前の値を返す
///
/// 遷移に制約はありません（delivered → scheduled も可）。
pub fn apply_status(record: &mut DeliveryRecord, status: DeliveryStatus) -> DeliveryStatus {
    record.set_status(status)
}


#[cfg(test)]
mod tests {
    use super::fixtures::acme;
    use super::*;
    use rstest::rstest;
    use ulid::Ulid;

    fn some_id() -> DeliveryId {
        DeliveryId::from_ulid(Ulid::new())
    }

    #[test]
    fn valid_input_passes() {
        let (date, time) = validate(&acme()).unwrap();
        assert_eq!(date, ScheduleDate::new(2024, 2, 1));
        assert_eq!(time, ScheduleTime::new(10, 0));
    }

    #[rstest]
    #[case::customer_name(RequiredField::CustomerName)]
    #[case::address(RequiredField::Address)]
    #[case::city(RequiredField::City)]
    #[case::scheduled_date(RequiredField::ScheduledDate)]
    #[case::scheduled_time(RequiredField::ScheduledTime)]
    #[case::driver_id(RequiredField::DriverId)]
    fn each_required_field_is_checked(#[case] field: RequiredField) {
        let mut input = acme();
        match field {
            RequiredField::CustomerName => input.customer_name.clear(),
            RequiredField::Address => input.address.clear(),
            RequiredField::City => input.city.clear(),
            RequiredField::ScheduledDate => input.scheduled_date.clear(),
            RequiredField::ScheduledTime => input.scheduled_time.clear(),
            RequiredField::DriverId => input.driver_id.clear(),
        }
        assert_eq!(validate(&input), Err(ValidationError::MissingField(field)));
    }

    #[test]
    fn first_missing_field_wins() {
        let input = NewDelivery {
            city: String::new(),
            scheduled_time: String::new(),
            driver_id: String::new(),
            ..acme()
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(RequiredField::City));
        assert_eq!(err.field_name(), "city");
    }

    #[test]
    fn missing_fields_are_reported_before_format_errors() {
        let input = NewDelivery {
            scheduled_date: "tomorrow".into(),
            driver_id: String::new(),
            ..acme()
        };
        assert_eq!(
            validate(&input),
            Err(ValidationError::MissingField(RequiredField::DriverId))
        );
    }

    #[test]
    fn date_is_checked_before_time() {
        let input = NewDelivery {
            scheduled_date: "01/02/2024".into(),
            scheduled_time: "10am".into(),
            ..acme()
        };
        assert_eq!(
            validate(&input),
            Err(ValidationError::InvalidDate("01/02/2024".into()))
        );
    }

    #[rstest]
    #[case("ZZ")]
    #[case("on")]
    #[case("")]
    fn province_must_come_from_the_list(#[case] province: &str) {
        let input = NewDelivery {
            province: province.into(),
            ..acme()
        };
        assert_eq!(
            validate(&input),
            Err(ValidationError::UnknownProvince(province.into()))
        );
    }

    #[test]
    fn province_is_checked_after_the_schedule() {
        let input = NewDelivery {
            province: "ZZ".into(),
            scheduled_time: "10am".into(),
            ..acme()
        };
        assert_eq!(
            validate(&input),
            Err(ValidationError::InvalidTime("10am".into()))
        );
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let input = NewDelivery {
            driver_name: String::new(),
            special_instructions: Some(String::new()),
            ..acme()
        };
        assert!(validate(&input).is_ok());
    }

    #[rstest]
    #[case(None)]
    #[case(Some(DeliveryStatus::Delivered))]
    #[case(Some(DeliveryStatus::EnRoute))]
    fn admitted_record_is_always_scheduled(#[case] requested: Option<DeliveryStatus>) {
        let input = NewDelivery {
            status: requested,
            ..acme()
        };
        let record = admit(some_id(), input).unwrap();
        assert_eq!(record.status, DeliveryStatus::Scheduled);
    }

    #[test]
    fn admitted_record_keeps_input_fields() {
        let id = some_id();
        let input = NewDelivery {
            special_instructions: Some("Use loading dock B.".into()),
            ..acme()
        };
        let record = admit(id, input.clone()).unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.customer_name, input.customer_name);
        assert_eq!(record.address, input.address);
        assert_eq!(record.city, input.city);
        assert_eq!(record.province, input.province);
        assert_eq!(record.scheduled_date.to_string(), input.scheduled_date);
        assert_eq!(record.scheduled_time.to_string(), input.scheduled_time);
        assert_eq!(record.driver_id.as_str(), input.driver_id);
        assert_eq!(record.driver_name, input.driver_name);
        assert_eq!(record.special_instructions, input.special_instructions);
    }

    #[test]
    fn any_status_can_follow_any_status() {
        let mut record = admit(some_id(), acme()).unwrap();
        for from in DeliveryStatus::ALL {
            for to in DeliveryStatus::ALL {
                apply_status(&mut record, from);
                let previous = apply_status(&mut record, to);
                assert_eq!(previous, from);
                assert_eq!(record.status, to);
            }
        }
    }
}

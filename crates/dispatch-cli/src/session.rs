//! Session - 1 行読んでボードに適用し、結果を表示するループ

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use dispatch_core::app::{BoardError, DeliveryBoard, Intent};
use dispatch_core::domain::{
    DRIVER_PROFILE, DRIVER_ROSTER, DeliveryError, DriverId, PROVINCES, find_driver,
};
use dispatch_core::ports::DeliveryStore;

use crate::command::{Command, parse_line};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// 入力の終わりか `quit` までボードを動かす
pub fn run<S, R, W>(board: &mut DeliveryBoard<S>, input: R, out: &mut W, prompt: bool) -> Result<()>
where
    S: DeliveryStore,
    R: BufRead,
    W: Write,
{
    if prompt {
        writeln!(out, "Delivery schedule for {}. Type `help` for commands.", board.today())?;
    }
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;
        let command = match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(Ok(command))) => command,
            Ok(Some(Err(err))) => {
                write!(out, "{}", err.render())?;
                continue;
            }
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };
        if execute(board, command, out)? == Flow::Quit {
            break;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn execute<S, W>(board: &mut DeliveryBoard<S>, command: Command, out: &mut W) -> Result<Flow>
where
    S: DeliveryStore,
    W: Write,
{
    debug!(?command, "executing");
    match command {
        Command::List => {
            let heading = match board.driver_filter() {
                Some(driver_id) => format!("Deliveries for {}", driver_label(driver_id)),
                None => "Deliveries".to_string(),
            };
            write!(out, "{}", render::record_list(&heading, &board.deliveries()))?;
        }
        Command::Today => {
            let heading = format!("Today's deliveries ({})", board.today());
            write!(out, "{}", render::record_list(&heading, &board.today_deliveries()))?;
        }
        Command::Upcoming => {
            if board.features().show_upcoming {
                write!(
                    out,
                    "{}",
                    render::record_list("Upcoming deliveries", &board.upcoming_deliveries())
                )?;
            } else {
                writeln!(out, "Upcoming deliveries are turned off.")?;
            }
        }
        Command::Stats => match board.stats() {
            Some(counts) => write!(out, "{}", render::stats(&counts))?,
            None => writeln!(out, "Statistics are turned off.")?,
        },
        Command::Show { id } => match board.store().get(id) {
            Some(record) => write!(out, "{}", render::details(&record))?,
            None => {
                let err = BoardError::from(DeliveryError::NotFound(id));
                write!(out, "{}", render::notice(&err.notice()))?;
            }
        },
        Command::Select { id } => {
            if apply(board, Intent::SelectDelivery(id), out)?
                && let Some(record) = board.selected()
            {
                write!(out, "{}", render::details(&record))?;
            }
        }
        Command::Close => {
            apply(board, Intent::CloseDetails, out)?;
        }
        Command::Status { id, status } => {
            apply(board, Intent::UpdateStatus { id, status }, out)?;
        }
        Command::Filter { driver } => {
            let driver_id = DriverId::new(driver);
            if find_driver(driver_id.as_str()).is_none() {
                warn!(%driver_id, "filtering by a driver outside the roster");
            }
            if apply(board, Intent::ToggleDriverFilter(driver_id), out)? {
                match board.driver_filter() {
                    Some(driver_id) => {
                        writeln!(out, "Showing deliveries for {}.", driver_label(driver_id))?
                    }
                    None => writeln!(out, "Showing all drivers.")?,
                }
            }
        }
        Command::Navigate { id } => {
            apply(board, Intent::Navigate(id), out)?;
        }
        Command::Call { id } => {
            apply(board, Intent::CallCustomer(id), out)?;
        }
        Command::Settings => {
            apply(board, Intent::OpenSettings, out)?;
        }
        Command::Profile { action } => match action {
            Some(action) => write!(out, "{}", render::notice(&action.notice(&DRIVER_PROFILE)))?,
            None => write!(out, "{}", render::profile(&DRIVER_PROFILE))?,
        },
        Command::Drivers => {
            for driver in &DRIVER_ROSTER {
                writeln!(out, "  {:<8} {}", driver.id, driver.name)?;
            }
        }
        Command::Provinces => {
            writeln!(out, "  {}", PROVINCES.join(" "))?;
        }
        Command::Json => {
            let json = serde_json::to_string_pretty(&board.deliveries())
                .context("failed to encode deliveries")?;
            writeln!(out, "{json}")?;
        }
        Command::Add(args) => {
            apply(board, Intent::AddDelivery(args.into_input()), out)?;
        }
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// インテントをボードに渡し、返ってきた通知を表示する。成功したかどうかを返す
fn apply<S, W>(board: &mut DeliveryBoard<S>, intent: Intent, out: &mut W) -> Result<bool>
where
    S: DeliveryStore,
    W: Write,
{
    match board.handle(intent) {
        Ok(Some(notice)) => {
            write!(out, "{}", render::notice(&notice))?;
            Ok(true)
        }
        Ok(None) => Ok(true),
        Err(err) => {
            debug!(error = %err, "intent rejected");
            write!(out, "{}", render::notice(&err.notice()))?;
            Ok(false)
        }
    }
}

fn driver_label(driver_id: &DriverId) -> String {
    match find_driver(driver_id.as_str()) {
        Some(driver) => format!("{} ({})", driver.name, driver.id),
        None => driver_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use dispatch_core::app::{BoardBuilder, BoardFeatures, SessionBoard};
    use dispatch_core::domain::DeliveryStatus;
    use dispatch_core::impls::NoopEventSink;
    use dispatch_core::ports::FixedClock;
    use rstest::{fixture, rstest};

    #[fixture]
    fn board() -> SessionBoard<FixedClock> {
        BoardBuilder::new()
            .event_sink(NoopEventSink)
            .build(FixedClock::new(
                Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
            ))
            .unwrap()
    }

    fn run_script(board: &mut SessionBoard<FixedClock>, script: &str) -> String {
        let mut out = Vec::new();
        run(board, script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    fn add_reports_success_and_grows_the_list(mut board: SessionBoard<FixedClock>) {
        let out = run_script(
            &mut board,
            r#"add --customer "Acme Ltd" --address "1 Rd" --city Kingston --date 2024-02-01 --time 10:00 --driver driver2"#,
        );

        assert_eq!(out, "[Success] New delivery has been scheduled successfully!\n");
        assert_eq!(board.store().len(), 5);
        let added = board
            .deliveries()
            .into_iter()
            .find(|record| record.customer_name == "Acme Ltd")
            .unwrap();
        assert_eq!(added.driver_name, "Sarah Chen");
        assert_eq!(added.status, DeliveryStatus::Scheduled);
    }

    #[rstest]
    fn add_with_missing_field_reports_validation_error(mut board: SessionBoard<FixedClock>) {
        let out = run_script(&mut board, "add --customer Acme --address '1 Rd'");

        assert_eq!(out, "[Validation Error] Please fill in the city\n");
        assert_eq!(board.store().len(), 4);
    }

    #[rstest]
    fn status_update_prints_wire_status(mut board: SessionBoard<FixedClock>) {
        let id = board.deliveries()[0].id;
        let out = run_script(&mut board, &format!("status {id} en-route"));

        assert_eq!(out, "[Status Updated] Delivery status updated to en-route!\n");
        assert_eq!(board.store().get(id).unwrap().status, DeliveryStatus::EnRoute);

        let out = run_script(&mut board, &format!("status {id} delivered"));
        assert_eq!(out, "[Status Updated] Delivery status updated to delivered!\n");
        assert_eq!(board.store().get(id).unwrap().status, DeliveryStatus::Delivered);
    }

    #[rstest]
    fn unknown_id_prints_not_found(mut board: SessionBoard<FixedClock>) {
        let out = run_script(&mut board, "call 01ARZ3NDEKTSV4RRFFQ69G5FAV");
        assert!(out.starts_with("[Not Found] "), "{out}");
    }

    #[rstest]
    fn filter_toggles(mut board: SessionBoard<FixedClock>) {
        let out = run_script(&mut board, "filter driver1\nlist\nfilter driver1");

        assert!(out.starts_with("Showing deliveries for Mike Johnson (driver1).\n"));
        assert!(out.contains("Deliveries for Mike Johnson (driver1) (2)"));
        assert!(out.ends_with("Showing all drivers.\n"));
        assert!(board.driver_filter().is_none());
    }

    #[rstest]
    fn unlisted_province_is_refused(mut board: SessionBoard<FixedClock>) {
        let out = run_script(
            &mut board,
            "add --customer Acme --address '1 Rd' --city Kingston --province ZZ --date 2024-02-01 --time 10:00 --driver driver1",
        );

        assert!(out.contains("invalid value 'ZZ'"), "{out}");
        assert_eq!(board.store().len(), 4);
    }

    #[rstest]
    fn profile_shows_the_driver(mut board: SessionBoard<FixedClock>) {
        let out = run_script(&mut board, "profile");
        assert!(out.starts_with("Mike Johnson\n"));
        assert!(out.contains("DRV001"));
    }

    #[rstest]
    #[case("profile call", "[Call] Calling (613) 555-0123\n")]
    #[case("profile email", "[Email] Opening email to mike.johnson@trucking.com\n")]
    #[case("profile emergency", "[Emergency] Calling dispatch emergency line...\n")]
    fn profile_actions_print_notices(
        mut board: SessionBoard<FixedClock>,
        #[case] line: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(run_script(&mut board, line), expected);
        assert_eq!(board.store().len(), 4);
    }

    #[rstest]
    fn settings_prints_a_notice(mut board: SessionBoard<FixedClock>) {
        let out = run_script(&mut board, "settings");
        assert_eq!(out, "[Settings] Driver settings and preferences\n");
    }

    #[rstest]
    fn quit_stops_the_session(mut board: SessionBoard<FixedClock>) {
        let out = run_script(&mut board, "quit\nstats");
        assert!(out.is_empty());
    }

    #[rstest]
    fn parse_errors_do_not_end_the_session(mut board: SessionBoard<FixedClock>) {
        let out = run_script(&mut board, "frobnicate\nadd --customer \"Acme\nstats");
        assert!(out.contains("unrecognized subcommand"));
        assert!(out.contains("error: unbalanced quotes or trailing backslash"));
        assert!(out.contains("Total: 4"));
    }

    #[rstest]
    fn select_shows_details(mut board: SessionBoard<FixedClock>) {
        let record = board.deliveries()[1].clone();
        let out = run_script(&mut board, &format!("select {}", record.id));

        assert!(out.starts_with(&format!("Delivery {}\n", record.id)));
        assert_eq!(board.selected().map(|r| r.id), Some(record.id));
    }

    #[test]
    fn disabled_features_are_reported() {
        let mut board = BoardBuilder::new()
            .features(BoardFeatures {
                show_upcoming: false,
                show_stats: false,
                driver_filter_enabled: false,
            })
            .event_sink(NoopEventSink)
            .build(FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()))
            .unwrap();

        let out = run_script(&mut board, "upcoming\nstats\nfilter driver1");
        assert_eq!(
            out,
            "Upcoming deliveries are turned off.\n\
             Statistics are turned off.\n\
             [Unavailable] Driver filtering is not enabled on this board\n"
        );
    }

    #[rstest]
    fn json_lists_visible_deliveries(mut board: SessionBoard<FixedClock>) {
        let out = run_script(&mut board, "json");
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 4);
        assert!(value[0].get("customerName").is_some());
    }
}

use std::io::Cursor;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use teletraffic_cli::menu::Shell;
use teletraffic_cli::prompt::Prompter;
use teletraffic_cli::CalculatorConfig;

fn session_with(config: &CalculatorConfig, script: &[u8]) -> String {
    let prompter = Prompter::new(
        Cursor::new(script.to_vec()),
        Vec::new(),
        Arc::new(AtomicBool::new(false)),
    );
    let mut shell = Shell::new(prompter, config);
    shell.run().expect("session completes");
    String::from_utf8(shell.into_output()).expect("utf-8 transcript")
}

fn session(script: &str) -> String {
    session_with(&CalculatorConfig::default(), script.as_bytes())
}

#[test]
fn quit_from_main_menu() {
    let out = session("q\n");
    assert!(out.contains("Traffic Calculations"));
    assert!(out.contains("Press Q to return to main menu"));
    assert_eq!(out.matches("Traffic Calculations").count(), 1);
}

#[test]
fn erlang_calculation_with_retries() {
    let out = session("1\n60\n0\n30\n30\nQ\n");
    assert!(out.contains("Invalid option. Must be a whole number greater than 0"));
    assert!(out.contains("Total traffic Erlangs offered in an hour is 1.000"));
    assert_eq!(out.matches("Traffic Calculations").count(), 2);
}

#[test]
fn channel_sizing_reprompts_for_target_above_one() {
    let out = session("2\n10\n1.5\n0.01\nq\n");
    assert!(out.contains("Invalid option. invalid blocking target: 1.5"));
    assert!(out.contains("You would require 18 channels."));
}

#[test]
fn channel_sizing_reports_exhausted_search() {
    let config = CalculatorConfig {
        max_channel_search: 20,
        ..CalculatorConfig::default()
    };
    let out = session_with(&config, b"2\n100\n0.01\nq\n");
    assert!(out.contains("no channel count up to 20 meets the blocking target 0.01"));
    assert_eq!(out.matches("Traffic Calculations").count(), 2);
}

#[test]
fn blocking_probability_as_percentage() {
    let out = session("3\n10\n5\nq\n");
    assert!(out.contains("There would be a 56.40% chance to block calls."));
}

#[test]
fn bandwidth_walks_codec_layer_and_vlan_menus() {
    let out = session("4\n1\n9\n1\n3\n2\nq\n");
    assert!(out.contains("Which Codec would you like to use: "));
    assert!(out.contains("Invalid option. Please enter a number between 1 and 8"));
    assert!(out.contains("What layer of Network do you want to calculate from: "));
    assert!(out.contains("Do you want to include in calculation: "));
    assert!(out.contains("Because Silence Suppression"));
    assert!(out.contains("It will require approximately 80.00 Kbps."));
}

#[test]
fn cancel_inside_calculator_returns_to_menu() {
    let out = session("4\n10\nq\n3\n10\n5\nq\n");
    assert!(out.contains("Returning to menu."));
    assert!(!out.contains("It will require approximately"));
    assert!(out.contains("56.40%"));
    assert_eq!(out.matches("Traffic Calculations").count(), 3);
}

#[test]
fn empty_and_garbage_menu_entries() {
    let out = session("\nfive\n7\nq\n");
    assert!(out.contains("Entry cannot be empty."));
    assert_eq!(
        out.matches("Invalid option. Please enter a number between 1 and 4")
            .count(),
        2
    );
}

#[test]
fn non_utf8_entry_is_rejected_without_ending_session() {
    let out = session_with(&CalculatorConfig::default(), b"1\n\xff\xfe\n60\n30\n30\nq\n");
    assert!(out.contains("Invalid option. Please enter a whole number."));
    assert!(out.contains("Total traffic Erlangs offered in an hour is 1.000"));
    assert_eq!(out.matches("Traffic Calculations").count(), 2);
}

#[test]
fn end_of_input_ends_session_mid_calculation() {
    let out = session("3\n10\n");
    assert!(out.contains("Number of channels: "));
    assert!(!out.contains("% chance to block calls."));
}

#[test]
fn configured_cancel_token() {
    let config = CalculatorConfig {
        cancel_token: "exit".to_string(),
        ..CalculatorConfig::default()
    };
    let out = session_with(&config, b"q\nEXIT\n");
    assert!(out.contains("Press exit to return to main menu"));
    assert!(out.contains("Invalid option. Please enter a number between 1 and 4"));
}

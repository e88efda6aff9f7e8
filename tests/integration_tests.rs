//! End-to-end tests across the engines, the way the UI shell drives them.

use devtoolkit::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_quick_start_flow() {
    init_logging();

    let pretty = format_json(r#"{"user":{"id":1}}"#).unwrap();
    assert_eq!(pretty, "{\n  \"user\": {\n    \"id\": 1\n  }\n}");

    let encoded = encode_base64(&pretty);
    assert_eq!(decode_base64(&encoded).unwrap(), pretty);

    let digests = compute_digests(&pretty);
    assert!(!digests.is_empty());

    let result = match_pattern(r#""(\w+)""#, "g", &pretty).unwrap();
    let keys: Vec<_> = result
        .matches
        .iter()
        .map(|m| m.groups[0].clone().unwrap())
        .collect();
    assert_eq!(keys, vec!["user", "id"]);
}

#[test]
fn test_errors_stay_scoped_to_their_tool() {
    init_logging();

    let bad_json = run_transform(&TransformRequest::new("{oops", Mode::JsonFormat));
    let good_b64 = run_transform(&TransformRequest::new("ok", Mode::Base64Encode));
    assert!(!bad_json.ok);
    assert!(good_b64.ok);

    assert!(match_pattern("(", "", "x").is_err());
    assert_eq!(match_pattern("x", "", "x").unwrap().len(), 1);

    let mut colors = ColorState::new();
    colors.apply_hex("#336699").unwrap();
    assert!(colors.apply_rgb("rgb(300, 0, 0)").is_err());
    assert_eq!(colors.current().hex, "#336699");
}

#[test]
fn test_generated_test_data_is_consistent() {
    init_logging();

    let cpf = generate_cpf(CpfStyle::Formatted);
    assert!(validate_cpf(&cpf));
    assert_eq!(format_cpf(&cpf), cpf);

    let cep = generate_cep(true);
    assert_eq!(format_cep(&cep), cep);

    let id = generate_uuid();
    let token_header = encode_base64(&format!(r#"{{"kid":"{}"}}"#, id));
    let token_payload = encode_base64(r#"{"sub":"tester"}"#);
    let decoded = decode_token(&format!("{}.{}.sig", token_header, token_payload)).unwrap();
    assert_eq!(decoded.header["kid"], id.as_str());
}

#[test]
fn test_results_serialize_for_the_shell() {
    let transform = serde_json::to_value(run_transform(&TransformRequest::new(
        "%zz",
        Mode::UrlDecode,
    )))
    .unwrap();
    assert_eq!(transform["ok"], false);
    assert!(transform["errorMessage"].as_str().unwrap().contains("percent-encoding"));

    let color = serde_json::to_value(ColorValue::from(Rgb::new(255, 0, 0))).unwrap();
    assert_eq!(color["hex"], "#FF0000");
    assert_eq!(color["hsl"]["l"], 50);

    let segments = serde_json::to_value(match_pattern("b", "", "abc").unwrap().segments).unwrap();
    assert_eq!(segments[1]["text"], "b");
    assert_eq!(segments[1]["matched"], true);
}

#[test]
fn test_git_reference_lookup() {
    let careful: Vec<_> = command_groups()
        .iter()
        .flat_map(|group| group.commands.iter())
        .filter(|cmd| cmd.destructive)
        .map(|cmd| cmd.id)
        .collect();
    assert_eq!(careful, vec!["rebase-branch", "reset-hard"]);

    assert_eq!(find_command("amend-no-edit").unwrap().command, "git commit --amend --no-edit");
    assert_eq!(search_commands("rebase").len(), 3);
}

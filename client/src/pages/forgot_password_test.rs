use super::*;

#[test]
fn notice_mentions_link_only_when_token_is_echoed() {
    assert_eq!(reset_requested_notice(Some("rt")), "Reset link generated. Use the link below to continue.");
    assert_eq!(reset_requested_notice(None), "If that email is registered, a reset link is on its way.");
}

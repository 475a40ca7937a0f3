use super::*;

#[test]
fn public_zone_always_allows() {
    for phase in [AuthPhase::Unknown, AuthPhase::Unauthenticated, AuthPhase::Member, AuthPhase::Admin] {
        assert_eq!(decide(phase, Zone::Public), GuardDecision::Allow, "{phase:?}");
    }
}

#[test]
fn admin_zone_table() {
    assert_eq!(decide(AuthPhase::Unknown, Zone::Admin), GuardDecision::Loading);
    assert_eq!(decide(AuthPhase::Unauthenticated, Zone::Admin), GuardDecision::RedirectToLogin);
    assert_eq!(decide(AuthPhase::Member, Zone::Admin), GuardDecision::RedirectToHome);
    assert_eq!(decide(AuthPhase::Admin, Zone::Admin), GuardDecision::Allow);
}

#[test]
fn redirect_targets() {
    assert_eq!(GuardDecision::RedirectToLogin.redirect_target(), Some("/login"));
    assert_eq!(GuardDecision::RedirectToHome.redirect_target(), Some("/"));
    assert_eq!(GuardDecision::Loading.redirect_target(), None);
    assert_eq!(GuardDecision::Allow.redirect_target(), None);
}

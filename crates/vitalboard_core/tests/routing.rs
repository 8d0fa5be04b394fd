use vitalboard_core::Route;

#[test]
fn known_paths_resolve_to_their_views() {
    assert_eq!(Route::resolve("/"), Route::Dashboard);
    assert_eq!(Route::resolve("/profile"), Route::Profile);
    assert_eq!(Route::resolve("/health-metrics"), Route::HealthMetrics);
    assert_eq!(Route::resolve("/health-goals"), Route::HealthGoals);
    assert_eq!(Route::resolve("/medical-history"), Route::MedicalHistory);
}

#[test]
fn trailing_slash_query_and_fragment_are_ignored() {
    assert_eq!(Route::resolve("/profile/"), Route::Profile);
    assert_eq!(Route::resolve("/health-goals?tab=actions"), Route::HealthGoals);
    assert_eq!(Route::resolve("/medical-history#prescriptions"), Route::MedicalHistory);
    assert_eq!(Route::resolve(""), Route::Dashboard);
}

#[test]
fn unknown_paths_fall_back_to_not_found() {
    assert_eq!(Route::resolve("/settings"), Route::NotFound);
    assert_eq!(Route::resolve("/profile/edit"), Route::NotFound);
    assert_eq!(Route::resolve("profile"), Route::NotFound);
}

#[test]
fn navigable_routes_round_trip_through_their_paths() {
    for route in Route::NAVIGABLE {
        assert_eq!(Route::resolve(route.path()), route);
        assert!(!route.title().is_empty());
    }
    assert!(!Route::NAVIGABLE.contains(&Route::NotFound));
}

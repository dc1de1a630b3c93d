use super::*;

fn owner_ref(kind: &str, name: &str, controller: Option<bool>) -> metav1::OwnerReference {
    metav1::OwnerReference {
        api_version: "apps/v1".into(),
        kind: kind.into(),
        name: name.into(),
        uid: format!("{name}-uid"),
        controller,
        ..Default::default()
    }
}

#[rstest]
fn test_created_by_no_owners() {
    assert_eq!(created_by(&[]), (String::new(), String::new()));
}

#[rstest]
fn test_created_by_single_owner() {
    let owners = vec![owner_ref("ReplicaSet", "the-replicaset", Some(true))];
    assert_eq!(created_by(&owners), ("ReplicaSet".into(), "the-replicaset".into()));
}

#[rstest]
#[case::first_is_controller(Some(true), None)]
#[case::second_is_controller(None, Some(true))]
#[case::no_controller(None, None)]
fn test_created_by_first_owner_wins(#[case] first_controller: Option<bool>, #[case] second_controller: Option<bool>) {
    let owners = vec![
        owner_ref("Deployment", "zzz-last-alphabetically", first_controller),
        owner_ref("CronJob", "aaa-first-alphabetically", second_controller),
        owner_ref("Job", "the-job", None),
    ];
    assert_eq!(created_by(&owners), ("Deployment".into(), "zzz-last-alphabetically".into()));
}

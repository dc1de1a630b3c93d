use assertables::*;
use ksl_testutils::*;

use super::*;

#[rstest]
#[tokio::test]
async fn test_discover_cached() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle(|when, then| {
        when.path("/apis/apps/v1");
        then.json_body(apps_v1_discovery());
    });
    fake_apiserver.build();

    let gvk = GVK::new("apps", "v1", "Deployment");
    let mut apiset = ApiSet::new(client);
    let (ar, _) = apiset.discover(&gvk).await.unwrap().clone();
    assert_eq!(ar.plural, "deployments");

    // second lookup is served from the cache, so the mock is still only hit once
    assert_ok!(apiset.discover(&gvk).await);
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_discover_not_served() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_not_found("/apis/tortoise/v1".into());
    fake_apiserver.build();

    let mut apiset = ApiSet::new(client);
    assert_err!(apiset.discover(&GVK::new("tortoise", "v1", "Shell")).await);
    fake_apiserver.assert();
}

//! Listing and pagination integration tests.

use crate::in_memory::helpers::{TestService, seed, service};
use rstest::rstest;
use tasktrail::pagination::ListQuery;

async fn listed_ids(service: &TestService, query: ListQuery) -> eyre::Result<Vec<i64>> {
    Ok(service
        .list(query)
        .await?
        .iter()
        .map(|activity| activity.task_id().value())
        .collect())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn latest_create_leads_newest_first_listing(service: TestService) -> eyre::Result<()> {
    seed(&service, 100).await?;
    seed(&service, 3).await?;
    seed(&service, 7).await?;

    assert_eq!(
        listed_ids(&service, ListQuery::newest_first().with_limit(1)).await?,
        vec![7]
    );
    Ok(())
}

#[rstest]
#[case::all(ListQuery::oldest_first(), vec![10, 20, 30, 40])]
#[case::reversed(ListQuery::newest_first(), vec![40, 30, 20, 10])]
#[case::page(ListQuery::oldest_first().with_offset(1).with_limit(2), vec![20, 30])]
#[case::tail(ListQuery::newest_first().with_offset(3), vec![10])]
#[case::past_end(ListQuery::oldest_first().with_offset(10), vec![])]
#[tokio::test(flavor = "multi_thread")]
async fn windows_apply_after_ordering(
    service: TestService,
    #[case] query: ListQuery,
    #[case] expected: Vec<i64>,
) -> eyre::Result<()> {
    for raw_id in [10, 20, 30, 40] {
        seed(&service, raw_id).await?;
    }

    assert_eq!(listed_ids(&service, query).await?, expected);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn history_listing_pages_newest_first(service: TestService) -> eyre::Result<()> {
    for raw_id in 1..=5 {
        seed(&service, raw_id).await?;
    }

    let page = service
        .histories(ListQuery::newest_first().with_offset(1).with_limit(2))
        .await?;
    let ids: Vec<i64> = page.iter().map(|entry| entry.task_id().value()).collect();

    assert_eq!(ids, vec![4, 3]);
    Ok(())
}

//! # 계정 페이지 스트림
//!
//! `list_accounts`를 다음 페이지 토큰이 없을 때까지 지연 호출하는 스트림과,
//! 제한 시간/최대 페이지 수를 적용해 스트림을 소비하는 [`scan_pages`]를 제공합니다.
//!
//! 스트림은 소비자가 폴링할 때만 다음 페이지를 요청하므로, 소비자가 중단하거나
//! 제한 시간이 지나 스트림이 drop되면 이후 페이지는 요청되지 않습니다.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;
use futures_util::stream::{self, BoxStream, StreamExt, TryStreamExt};
use crate::config::DirectoryConfig;
use crate::domain::models::auth::CallerContext;
use crate::domain::models::directory::{AccountPage, AccountQuery};
use crate::repositories::directory::directory_api::{DirectoryApi, DirectoryError};

pub type AccountPageStream = BoxStream<'static, Result<AccountPage, DirectoryError>>;

enum PageCursor {
    Start,
    Next(String),
    Done,
}

/// 첫 페이지부터 마지막 페이지까지 순서대로 내보내는 지연 스트림
pub fn account_pages(
    directory: Arc<dyn DirectoryApi>,
    caller: CallerContext,
    query: AccountQuery,
) -> AccountPageStream {
    stream::try_unfold(PageCursor::Start, move |cursor| {
        let directory = directory.clone();
        let caller = caller.clone();
        let query = query.clone();

        async move {
            let page_query = match cursor {
                PageCursor::Done => return Ok(None),
                PageCursor::Start => query,
                PageCursor::Next(token) => query.with_page_token(token),
            };

            let page = directory.list_accounts(&caller, &page_query).await?;
            let next = match &page.next_page_token {
                Some(token) => PageCursor::Next(token.clone()),
                None => PageCursor::Done,
            };

            Ok(Some((page, next)))
        }
    })
    .boxed()
}

/// 스캔 제한
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimits {
    pub deadline: Duration,
    pub max_pages: usize,
}

impl ScanLimits {
    pub fn from_config() -> Self {
        Self {
            deadline: DirectoryConfig::scan_timeout(),
            max_pages: DirectoryConfig::scan_max_pages(),
        }
    }
}

/// 스캔 종료 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// 방문자가 중단을 요청함
    Stopped { pages: usize },
    /// 모든 페이지를 방문함
    Exhausted { pages: usize },
}

/// 제한을 적용하여 페이지 스트림을 소비합니다.
///
/// 페이지 에러, 제한 시간 초과, 최대 페이지 수 초과는 모두 `DirectoryError::Unavailable`로
/// 보고되며, 이 경우 스캔 결과를 신뢰해서는 안 됩니다.
pub async fn scan_pages<F>(
    pages: AccountPageStream,
    limits: ScanLimits,
    visit: F,
) -> Result<ScanOutcome, DirectoryError>
where
    F: FnMut(&AccountPage) -> ControlFlow<()>,
{
    match actix_web::rt::time::timeout(limits.deadline, drive(pages, limits.max_pages, visit)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(DirectoryError::Unavailable(format!(
            "directory scan exceeded {}s deadline",
            limits.deadline.as_secs()
        ))),
    }
}

async fn drive<F>(
    mut pages: AccountPageStream,
    max_pages: usize,
    mut visit: F,
) -> Result<ScanOutcome, DirectoryError>
where
    F: FnMut(&AccountPage) -> ControlFlow<()>,
{
    let mut visited = 0usize;

    while let Some(page) = pages.try_next().await? {
        visited += 1;

        if visit(&page).is_break() {
            return Ok(ScanOutcome::Stopped { pages: visited });
        }

        if visited >= max_pages && page.next_page_token.is_some() {
            return Err(DirectoryError::Unavailable(format!(
                "directory scan exceeded {} page limit",
                max_pages
            )));
        }
    }

    Ok(ScanOutcome::Exhausted { pages: visited })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::directory::AccountFields;
    use crate::repositories::directory::mock_directory::{identity, MockDirectory};

    fn caller() -> CallerContext {
        CallerContext::new("admin@acme.com").unwrap()
    }

    fn limits() -> ScanLimits {
        ScanLimits {
            deadline: Duration::from_secs(5),
            max_pages: 100,
        }
    }

    fn three_page_directory() -> Arc<MockDirectory> {
        Arc::new(MockDirectory::with_pages(vec![
            vec![identity("a@acme.com", &[])],
            vec![identity("b@acme.com", &[])],
            vec![identity("c@acme.com", &[])],
        ]))
    }

    #[actix_web::test]
    async fn test_stream_follows_page_tokens_in_order() {
        let directory = three_page_directory();
        let query = AccountQuery::first_page(1, AccountFields::AddressesOnly);

        let pages: Vec<AccountPage> = account_pages(directory.clone(), caller(), query)
            .try_collect()
            .await
            .unwrap();

        let addresses: Vec<&str> = pages
            .iter()
            .flat_map(|page| page.accounts.iter().map(|a| a.primary_email.as_str()))
            .collect();
        assert_eq!(addresses, vec!["a@acme.com", "b@acme.com", "c@acme.com"]);
        assert_eq!(directory.list_calls(), 3);
    }

    #[actix_web::test]
    async fn test_stopping_early_skips_remaining_pages() {
        let directory = three_page_directory();
        let stream = account_pages(
            directory.clone(),
            caller(),
            AccountQuery::first_page(1, AccountFields::AddressesOnly),
        );

        let outcome = scan_pages(stream, limits(), |page| {
            if page.accounts.iter().any(|a| a.has_primary("a@acme.com")) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .await
        .unwrap();

        assert_eq!(outcome, ScanOutcome::Stopped { pages: 1 });
        assert_eq!(directory.list_calls(), 1);
    }

    #[actix_web::test]
    async fn test_page_limit_is_unavailable() {
        let directory = three_page_directory();
        let stream = account_pages(
            directory,
            caller(),
            AccountQuery::first_page(1, AccountFields::AddressesOnly),
        );

        let result = scan_pages(stream, ScanLimits { max_pages: 2, ..limits() }, |_| ControlFlow::Continue(())).await;

        assert!(matches!(result, Err(DirectoryError::Unavailable(_))));
    }

    #[actix_web::test]
    async fn test_page_limit_equal_to_page_count_completes() {
        let directory = three_page_directory();
        let stream = account_pages(
            directory,
            caller(),
            AccountQuery::first_page(1, AccountFields::AddressesOnly),
        );

        let outcome = scan_pages(stream, ScanLimits { max_pages: 3, ..limits() }, |_| ControlFlow::Continue(()))
            .await
            .unwrap();

        assert_eq!(outcome, ScanOutcome::Exhausted { pages: 3 });
    }

    #[actix_web::test]
    async fn test_deadline_is_unavailable() {
        let directory = three_page_directory();
        directory.set_page_delay(Duration::from_millis(200));
        let stream = account_pages(
            directory,
            caller(),
            AccountQuery::first_page(1, AccountFields::AddressesOnly),
        );

        let result = scan_pages(
            stream,
            ScanLimits { deadline: Duration::from_millis(50), ..limits() },
            |_| ControlFlow::Continue(()),
        )
        .await;

        match result {
            Err(DirectoryError::Unavailable(msg)) => assert!(msg.contains("deadline")),
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }
}

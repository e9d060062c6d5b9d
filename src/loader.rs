use async_trait::async_trait;

/// Retrieves the text of a remote game record.
#[async_trait(?Send)]
pub trait Fetch {
    async fn get(&self, url: &str) -> anyhow::Result<String>;
}

/// Turns record text into a move tree.
///
/// The record grammar lives outside this crate; sessions only need
/// something that can build a tree from text.
pub trait Format {
    fn parse(&self, text: &str) -> anyhow::Result<crate::MoveTree>;
}

/// Identifies one issued download. Tickets grow monotonically per session,
/// and only the newest one may be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub(crate) u64);

/// A download that has been issued but not yet run.
///
/// It carries no borrow of the session, so any number of them can be in
/// flight while the session keeps handling input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    ticket: Ticket,
    url: String,
}

impl Download {
    pub(crate) fn new(ticket: Ticket, url: String) -> Self {
        Self { ticket, url }
    }
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }
    pub fn url(&self) -> &str {
        &self.url
    }
    pub async fn run<F>(self, fetcher: &F) -> Delivery
    where
        F: Fetch + ?Sized,
    {
        log::debug!("fetching {}", self.url);
        let text = fetcher.get(&self.url).await;
        Delivery {
            ticket: self.ticket,
            text,
        }
    }
}

/// The result of a finished download, waiting to be applied.
#[derive(Debug)]
pub struct Delivery {
    pub(crate) ticket: Ticket,
    pub(crate) text: anyhow::Result<String>,
}

impl Delivery {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }
}

/// Plain-text GET in the browser. Anything but a 200 is an error.
#[cfg(feature = "client")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Http;

#[cfg(feature = "client")]
#[async_trait(?Send)]
impl Fetch for Http {
    async fn get(&self, url: &str) -> anyhow::Result<String> {
        let response = gloo_net::http::Request::get(url)
            .header("Accept", "text/plain")
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("GET {} failed: {}", url, e))?;
        match response.status() {
            200 => response
                .text()
                .await
                .map_err(|e| anyhow::anyhow!("GET {} unreadable: {}", url, e)),
            status => Err(anyhow::anyhow!("GET {} returned {}", url, status)),
        }
    }
}

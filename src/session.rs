use crate::*;

/// Called with the cursor's new address whenever it may have moved.
pub type Observer = Box<dyn FnMut(&Address)>;

/// One embedded editor: its tree (and so its cursor), its configuration,
/// and the bookkeeping for remote loads.
///
/// Every operation here is infallible from the caller's point of view.
/// Bad input, failed loads and boundary overruns are logged and absorbed;
/// the returned `Outcome`s are there for callers that care.
pub struct Session {
    tree: MoveTree,
    options: Options,
    format: Box<dyn Format>,
    observers: Vec<Observer>,
    issued: u64,
}

impl Session {
    pub fn new<F>(options: Options, format: F) -> Self
    where
        F: Format + 'static,
    {
        Self {
            tree: MoveTree::from(options.size),
            options,
            format: Box::new(format),
            observers: Vec::new(),
            issued: 0,
        }
    }

    pub fn tree(&self) -> &MoveTree {
        &self.tree
    }
    pub fn options(&self) -> &Options {
        &self.options
    }
    pub fn address(&self) -> Address {
        Address::of(&self.tree, self.tree.current())
    }

    /// Register a persistence hook.
    pub fn observe<F>(&mut self, observer: F)
    where
        F: FnMut(&Address) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        let address = self.address();
        for observer in self.observers.iter_mut() {
            observer(&address);
        }
    }

    fn navigator(&mut self) -> Navigator<'_, MoveTree> {
        Navigator::from(&mut self.tree)
    }

    /// Bring up the session from the embedding element's text content.
    ///
    /// With a remote record configured, the text is ignored and the download
    /// to run is handed back. Otherwise the text is parsed and loaded, and
    /// the configured path is walked.
    pub fn mount(&mut self, text: &str) -> Option<Download> {
        if let Some(url) = self.options.sgf.clone() {
            return Some(self.download(&url));
        }
        if self.open(text) {
            self.enter();
        }
        None
    }

    /// Replace the tree. The cursor starts at its root.
    pub fn load(&mut self, mut tree: MoveTree) {
        let root = tree.root();
        tree.focus(root);
        log::info!("loaded record with {} nodes", tree.len());
        self.tree = tree;
        self.notify();
    }

    fn open(&mut self, text: &str) -> bool {
        match self.format.parse(text) {
            Ok(tree) => {
                self.load(tree);
                true
            }
            Err(e) => {
                log::warn!("ignoring unreadable record: {}", e);
                false
            }
        }
    }

    /// walk the configured path
    fn enter(&mut self) {
        let path = self.options.path.clone();
        self.navigate(&path);
    }

    /// Walk a path string from the cursor.
    pub fn navigate(&mut self, path: &str) -> Walk {
        let path = Path::from(path);
        let walk = self.navigator().walk(&path);
        if !walk.outcome().is_skipped() {
            self.notify();
        }
        walk
    }

    /// Return to a persisted address string. Malformed text lands on the root.
    pub fn restore(&mut self, text: &str) -> Outcome {
        let outcome = match Address::try_from(text) {
            Ok(address) => self.navigator().restore(address),
            Err(e) => {
                log::warn!("restoring to root: {}", e);
                self.navigator().restore(Address::root());
                Outcome::Clamped
            }
        };
        self.notify();
        outcome
    }

    /// Enter a move below the cursor.
    pub fn play(&mut self, play: Move) -> Outcome {
        if self.options.tool == Tool::NavOnly {
            log::debug!("read-only session ignores {}", play);
            return Outcome::Skipped;
        }
        match self.tree.play(play) {
            Ok(_) => {
                self.notify();
                Outcome::Exact
            }
            Err(e) => {
                log::warn!("ignoring move: {}", e);
                Outcome::Skipped
            }
        }
    }

    /// Remove the cursor's subtree.
    pub fn cut(&mut self) -> Outcome {
        self.apply(Command::Cut)
    }

    pub fn press(&mut self, key: Key) -> Outcome {
        if !self.options.keys {
            return Outcome::Skipped;
        }
        self.apply(Command::from(key))
    }

    pub fn scroll(&mut self, delta: f64) -> Outcome {
        if !self.options.wheel {
            return Outcome::Skipped;
        }
        match Command::wheel(delta) {
            Some(command) => self.apply(command),
            None => Outcome::Skipped,
        }
    }

    fn apply(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::Advance(stride) => self.tree.advance(stride),
            Command::Retreat(stride) => self.tree.retreat(stride),
            Command::Select(offset) => self.tree.select(offset),
            Command::Cut => self.tree.cut(),
        };
        if !outcome.is_skipped() {
            self.notify();
        }
        outcome
    }

    /// Issue a download. Any download issued earlier becomes stale.
    pub fn download(&mut self, url: &str) -> Download {
        self.issued += 1;
        Download::new(Ticket(self.issued), url.to_string())
    }

    /// Make every in-flight download stale.
    pub fn cancel(&mut self) {
        self.issued += 1;
    }

    /// Apply a finished download if it is still the latest one issued:
    /// parse, load, then walk the configured path.
    pub fn deliver(&mut self, delivery: Delivery) -> bool {
        if delivery.ticket != Ticket(self.issued) {
            log::debug!("discarding stale download {:?}", delivery.ticket);
            return false;
        }
        match delivery.text {
            Ok(text) if self.open(&text) => {
                self.enter();
                true
            }
            Ok(_) => false,
            Err(e) => {
                log::warn!("ignoring failed download: {}", e);
                false
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("tree", &self.tree)
            .field("options", &self.options)
            .field("observers", &self.observers.len())
            .field("issued", &self.issued)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// records as whitespace-separated diagonal points on one line,
    /// with `|` starting a variation of the last move
    struct Diagonal;

    impl Format for Diagonal {
        fn parse(&self, text: &str) -> anyhow::Result<MoveTree> {
            let mut tree = MoveTree::default();
            let mut color = Color::Black;
            for token in text.split_whitespace() {
                if token == "|" {
                    tree.retreat(Stride::By(1));
                    color = color.flip();
                    continue;
                }
                let n = token.parse::<u8>()?;
                tree.play(Move::stone(color, n, n))?;
                color = color.flip();
            }
            Ok(tree)
        }
    }

    struct Canned(HashMap<&'static str, &'static str>);

    #[async_trait(?Send)]
    impl Fetch for Canned {
        async fn get(&self, url: &str) -> anyhow::Result<String> {
            self.0
                .get(url)
                .map(|text| text.to_string())
                .ok_or_else(|| anyhow::anyhow!("404 {}", url))
        }
    }

    fn canned() -> Canned {
        Canned(HashMap::from([
            ("/short", "1 2 3"),
            ("/long", "1 2 3 4 5 6"),
            ("/broken", "1 x 3"),
        ]))
    }

    fn session(path: &str) -> Session {
        let options = Options {
            path: path.to_string(),
            ..Options::default()
        };
        Session::new(options, Diagonal)
    }

    fn depth(session: &Session) -> usize {
        session.tree().cursor().depth()
    }

    #[test]
    fn mount_walks_configured_path() {
        let mut session = session("2B2");
        assert!(session.mount("1 2 3 | 4").is_none());
        assert_eq!(session.address(), Address::from((3, 2)));
    }

    #[test]
    fn mount_ignores_unreadable_text() {
        let mut session = session("2");
        assert!(session.mount("not a record").is_none());
        assert!(session.tree().is_empty());
        assert_eq!(session.address(), Address::root());
    }

    #[test]
    fn mount_prefers_remote_record() {
        let options = Options {
            sgf: Some("/short".to_string()),
            ..Options::default()
        };
        let mut session = Session::new(options, Diagonal);
        let download = session.mount("1 2").expect("download issued");
        assert_eq!(download.url(), "/short");
        assert!(session.tree().is_empty());
    }

    #[test]
    fn mount_reads_text_when_json_sgf_is_empty() {
        let options = Options::from_json(r#"{"sgf":"","path":"2"}"#).unwrap();
        let mut session = Session::new(options, Diagonal);
        assert!(session.mount("1 2 3").is_none());
        assert_eq!(session.address(), Address::from((2, 1)));
    }

    #[test]
    fn navigation_is_silent_past_the_end() {
        let mut session = session("");
        session.mount("1 2 3");
        let walk = session.navigate("5");
        assert_eq!(walk.outcome(), Outcome::Clamped);
        assert_eq!(depth(&session), 3);
    }

    #[test]
    fn restore_from_text() {
        let mut session = session("");
        session.mount("1 2 3 | 4 5");
        assert_eq!(session.restore("3,2"), Outcome::Exact);
        assert_eq!(session.address(), Address::from((3, 2)));
        assert_eq!(session.restore("garbage"), Outcome::Clamped);
        assert_eq!(session.address(), Address::root());
    }

    #[test]
    fn observers_see_every_move() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut session = session("");
        session.mount("1 2 3 | 4");
        let sink = seen.clone();
        session.observe(move |address| sink.borrow_mut().push(address.to_string()));
        session.navigate("2");
        session.press(Key::Right);
        session.press(Key::Down);
        session.navigate("");
        session.press(Key::Home);
        assert_eq!(*seen.borrow(), vec!["2,1", "3,1", "3,2", "0,0"]);
    }

    #[test]
    fn keyboard_navigation() {
        let mut session = session("");
        session.mount("1 2 3");
        assert_eq!(session.press(Key::PageDown), Outcome::Clamped);
        assert_eq!(depth(&session), 3);
        assert_eq!(session.press(Key::Home), Outcome::Exact);
        assert_eq!(depth(&session), 0);
        assert_eq!(session.press(Key::End), Outcome::Exact);
        assert_eq!(depth(&session), 3);
        assert_eq!(session.press(Key::Left), Outcome::Exact);
        assert_eq!(depth(&session), 2);
        assert_eq!(session.press(Key::Delete), Outcome::Exact);
        assert_eq!(depth(&session), 1);
        assert_eq!(session.tree().len(), 2);
    }

    #[test]
    fn disabled_inputs_are_ignored() {
        let options = Options {
            keys: false,
            wheel: false,
            ..Options::default()
        };
        let mut session = Session::new(options, Diagonal);
        session.mount("1 2 3");
        assert_eq!(session.press(Key::End), Outcome::Skipped);
        assert_eq!(session.scroll(1.), Outcome::Skipped);
        assert_eq!(depth(&session), 0);
    }

    #[test]
    fn wheel_navigation() {
        let mut session = session("");
        session.mount("1 2 3");
        assert_eq!(session.scroll(120.), Outcome::Exact);
        assert_eq!(session.scroll(120.), Outcome::Exact);
        assert_eq!(session.scroll(-120.), Outcome::Exact);
        assert_eq!(depth(&session), 1);
    }

    #[test]
    fn read_only_sessions_refuse_moves() {
        let options = Options {
            tool: Tool::NavOnly,
            ..Options::default()
        };
        let mut session = Session::new(options, Diagonal);
        assert_eq!(session.play(Move::pass(Color::Black)), Outcome::Skipped);
        assert!(session.tree().is_empty());
    }

    #[test]
    fn playing_moves_extends_the_tree() {
        let options = Options {
            size: Size::square(9),
            ..Options::default()
        };
        let mut session = Session::new(options, Diagonal);
        assert_eq!(session.play(Move::stone(Color::Black, 5, 5)), Outcome::Exact);
        assert_eq!(session.play(Move::stone(Color::White, 10, 10)), Outcome::Skipped);
        assert_eq!(session.address(), Address::from((1, 1)));
    }

    #[tokio::test]
    async fn download_loads_and_walks() {
        let mut session = session("2");
        let download = session.download("/long");
        let delivery = download.run(&canned()).await;
        assert!(session.deliver(delivery));
        assert_eq!(session.tree().len(), 7);
        assert_eq!(depth(&session), 2);
    }

    #[tokio::test]
    async fn latest_download_wins() {
        let fetcher = canned();
        let mut session = session("");
        let older = session.download("/long");
        let newer = session.download("/short");
        let newer = newer.run(&fetcher).await;
        let older = older.run(&fetcher).await;
        assert!(session.deliver(newer));
        assert!(!session.deliver(older));
        assert_eq!(session.tree().len(), 4);
    }

    #[tokio::test]
    async fn cancelled_downloads_are_dropped() {
        let fetcher = canned();
        let mut session = session("");
        let download = session.download("/short");
        session.cancel();
        assert!(!session.deliver(download.run(&fetcher).await));
        assert!(session.tree().is_empty());
    }

    #[tokio::test]
    async fn failed_downloads_keep_the_tree() {
        let fetcher = canned();
        let mut session = session("");
        session.mount("1 2");
        let missing = session.download("/missing").run(&fetcher).await;
        assert!(!session.deliver(missing));
        let broken = session.download("/broken").run(&fetcher).await;
        assert!(!session.deliver(broken));
        assert_eq!(session.tree().len(), 3);
    }
}

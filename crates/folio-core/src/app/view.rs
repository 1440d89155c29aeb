impl<'a, IN, ST, CB> PortfolioApp<'a, IN, ST, CB>
where
    IN: InputProvider,
    ST: SettingsStore,
    CB: ClipboardSink,
{
    pub fn new(
        input: IN,
        mut store: ST,
        clipboard: CB,
        config: PageConfig<'a>,
        now_ms: u64,
    ) -> Result<Self, PageError> {
        let typing = TypingSequencer::new(config.phrases, config.typing)?;

        let mut nav_targets = Vec::<&'a str, MAX_NAV_ENTRIES>::new();
        for link in config.nav {
            nav_targets
                .push(link.target)
                .map_err(|_| PageError::Sections(TrackerError::TooManyNavEntries))?;
        }
        let sections = ActiveSectionTracker::new(config.sections, &nav_targets, config.tracker)?;

        let fade_blocks = RevealSet::new(config.fade_blocks, config.reveal)
            .map_err(|_| PageError::TooManyFadeBlocks)?;

        let mut stat_targets = Vec::<_, MAX_STATS>::new();
        let mut stats = Vec::<StatCounter, MAX_STATS>::new();
        for spec in config.stats {
            stat_targets
                .push(spec.block)
                .map_err(|_| PageError::TooManyStats)?;
            stats
                .push(StatCounter::new(spec.target, config.stat_frame_ms))
                .map_err(|_| PageError::TooManyStats)?;
        }
        let stat_blocks = RevealSet::new(&stat_targets, config.stat_reveal)
            .map_err(|_| PageError::TooManyStats)?;

        let theme = match store.load() {
            Ok(Some(settings)) => {
                info!("settings: restored theme {}", settings.theme.as_str());
                settings.theme
            }
            Ok(None) => Theme::default(),
            Err(_) => {
                warn!("settings: load failed; using default theme");
                Theme::default()
            }
        };

        let preloader = AnimationSpec::new(
            AnimationKind::Fade,
            now_ms.saturating_add(config.preloader_delay_ms as u64),
            config.preloader_fade_ms,
        );

        let mut app = Self {
            input,
            store,
            clipboard,
            config,
            next_type_ms: now_ms.saturating_add(config.typing.start_delay_ms as u64),
            typing,
            sections,
            section_debounce: Debounce::new(config.nav_debounce_ms as u64),
            scroll_offset: 0,
            viewport_height: config.viewport_height,
            fade_blocks,
            stat_blocks,
            stats,
            notifier: Notifier::new(),
            contact: ContactForm::new(),
            theme,
            menu_open: false,
            scroll_request: None,
            preloader,
            pending_redraw: true,
        };

        app.sections.update(app.scroll_offset);
        app.observe_blocks(now_ms);
        Ok(app)
    }

    pub fn typed_text(&self) -> &'a str {
        self.typing.visible_text()
    }

    pub fn typing(&self) -> &TypingSequencer<'a> {
        &self.typing
    }

    pub fn current_section(&self) -> Option<&'a str> {
        self.sections.current()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    pub fn stat_value(&self, index: usize) -> Option<u32> {
        self.stats.get(index).map(StatCounter::value)
    }

    pub fn store(&self) -> &ST {
        &self.store
    }

    pub fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    pub fn clipboard(&self) -> &CB {
        &self.clipboard
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    /// Pending smooth-scroll destination requested by a navigation click.
    pub fn take_scroll_request(&mut self) -> Option<i32> {
        self.scroll_request.take()
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let mut nav = [NavItemView::default(); MAX_NAV_ENTRIES];
        let nav_count = self.config.nav.len().min(MAX_NAV_ENTRIES);
        for (index, link) in self.config.nav.iter().take(nav_count).enumerate() {
            nav[index] = NavItemView {
                label: link.label,
                target: link.target,
                selected: self.sections.is_selected(index),
            };
        }

        let mut stats = [StatView::default(); MAX_STATS];
        let stat_count = self.stats.len();
        for (index, (spec, counter)) in self.config.stats.iter().zip(&self.stats).enumerate() {
            stats[index] = StatView {
                label: spec.label,
                value: counter.value(),
            };
        }

        let notification = self.notifier.current().map(|banner| NotificationView {
            message: banner.message,
            kind: banner.kind,
            icon: banner.kind.icon(),
            animation: banner.animation(now_ms),
        });

        f(Screen {
            title: self.config.title,
            typed_text: self.typing.visible_text(),
            theme: self.theme,
            theme_icon: self.theme.icon(),
            navbar_scrolled: navbar_scrolled(self.scroll_offset),
            menu_open: self.menu_open,
            hero_offset: parallax_offset(self.scroll_offset),
            nav: &nav[..nav_count],
            stats: &stats[..stat_count],
            revealed: self.fade_blocks.revealed_count(),
            reveal_total: self.fade_blocks.target_count(),
            contact_button: self.contact.button_label(),
            contact_sending: self.contact.is_sending(),
            notification,
            preloader: self.preloader_view(now_ms),
        });
    }

    fn preloader_view(&self, now_ms: u64) -> PreloaderView {
        if now_ms < self.preloader.start_ms {
            PreloaderView::Shown
        } else {
            match self.preloader.frame(now_ms) {
                Some(frame) => PreloaderView::Fading(frame),
                None => PreloaderView::Hidden,
            }
        }
    }
}

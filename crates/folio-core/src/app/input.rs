impl<'a, IN, ST, CB> PortfolioApp<'a, IN, ST, CB>
where
    IN: InputProvider,
    ST: SettingsStore,
    CB: ClipboardSink,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider error");
                    self.notifier
                        .show(INPUT_ERROR_MESSAGE, NotificationKind::Error, now_ms);
                    self.pending_redraw = true;
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Scroll(offset) => {
                self.scroll_offset = offset;
                self.observe_blocks(now_ms);
                self.section_debounce.trigger(offset, now_ms);
            }
            InputEvent::Resize(height) => {
                self.viewport_height = height.max(0);
                self.observe_blocks(now_ms);
                self.section_debounce.trigger(self.scroll_offset, now_ms);
            }
            InputEvent::ToggleMenu => {
                self.menu_open = !self.menu_open;
            }
            InputEvent::NavLink(index) => {
                self.menu_open = false;
                self.request_scroll_to(index);
            }
            InputEvent::ClickOutside => {
                self.menu_open = false;
            }
            InputEvent::ToggleTheme => self.toggle_theme(),
            InputEvent::SubmitContact => {
                if self.contact.submit(now_ms) == SubmitResult::Ignored {
                    return;
                }
            }
            InputEvent::CopyEmail => {
                if !self.copy_email(now_ms) {
                    return;
                }
            }
        }

        self.pending_redraw = true;
    }

    fn request_scroll_to(&mut self, index: usize) {
        let Some(link) = self.config.nav.get(index) else {
            return;
        };
        if link.target.is_empty() {
            return;
        }

        match self.sections.region(link.target) {
            Some(region) => {
                let target = scroll_target(region.start, self.config.navbar_height);
                debug!("nav: scroll to #{} at {}", link.target, target);
                self.scroll_request = Some(target);
            }
            None => debug!("nav: no section #{}", link.target),
        }
    }

    fn copy_email(&mut self, now_ms: u64) -> bool {
        let email = self.config.email;
        if email.is_empty() {
            return false;
        }

        match self.clipboard.write_text(email) {
            Ok(()) => {
                info!("contact: copied {} to clipboard", email);
                self.notifier
                    .show(EMAIL_COPIED_MESSAGE, NotificationKind::Success, now_ms);
                true
            }
            Err(_) => {
                warn!("contact: clipboard write failed");
                false
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        let settings = PersistedSettings::new(self.theme);
        match self.store.save(&settings) {
            Ok(()) => info!("settings: theme saved ({})", self.theme.as_str()),
            Err(_) => warn!("settings: save failed; theme kept for this session"),
        }
    }

    /// Runs the fade-in and stat-block observers for the current viewport.
    fn observe_blocks(&mut self, now_ms: u64) {
        self.fade_blocks
            .observe(self.scroll_offset, self.viewport_height);

        if self
            .stat_blocks
            .observe(self.scroll_offset, self.viewport_height)
            == 0
        {
            return;
        }

        for (index, counter) in self.stats.iter_mut().enumerate() {
            if self.stat_blocks.is_revealed(index) && !counter.is_started() {
                counter.start(now_ms);
            }
        }
    }
}

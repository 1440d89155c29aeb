impl<'a, IN, ST, CB> PortfolioApp<'a, IN, ST, CB>
where
    IN: InputProvider,
    ST: SettingsStore,
    CB: ClipboardSink,
{
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        self.tick_sections(now_ms);
        self.tick_typing(now_ms);
        self.tick_counters(now_ms);
        self.tick_contact(now_ms);

        if self.notifier.tick(now_ms) {
            self.pending_redraw = true;
        }

        let animating = self
            .notifier
            .current()
            .is_some_and(|banner| banner.animation(now_ms).is_some())
            || self.preloader.frame(now_ms).is_some();

        if self.pending_redraw || animating {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Earliest instant at which `tick` has timed work to do.
    pub fn next_due_ms(&self, now_ms: u64) -> u64 {
        let mut due = self.next_type_ms;

        let candidates = [
            self.section_debounce.due_at(),
            self.contact.done_at_ms(),
            self.notifier.next_change_ms(now_ms),
            [self.preloader.start_ms, self.preloader.end_ms()]
                .into_iter()
                .find(|at| *at > now_ms),
        ];
        for at in candidates.into_iter().flatten() {
            due = due.min(at);
        }
        for counter in &self.stats {
            if let Some(at) = counter.next_frame_ms() {
                due = due.min(at);
            }
        }

        due.max(now_ms)
    }

    fn tick_sections(&mut self, now_ms: u64) {
        let Some(offset) = self.section_debounce.poll(now_ms) else {
            return;
        };

        self.sections.update(offset);
        self.pending_redraw = true;
    }

    fn tick_typing(&mut self, now_ms: u64) {
        if now_ms < self.next_type_ms {
            return;
        }

        let step = self.typing.step();
        self.next_type_ms = now_ms.saturating_add(step.delay_ms as u64);
        self.pending_redraw = true;
    }

    fn tick_counters(&mut self, now_ms: u64) {
        for counter in self.stats.iter_mut() {
            if counter.tick(now_ms) {
                self.pending_redraw = true;
            }
        }
    }

    fn tick_contact(&mut self, now_ms: u64) {
        if self.contact.poll(now_ms) {
            self.notifier
                .show(CONTACT_SENT_MESSAGE, NotificationKind::Success, now_ms);
            self.pending_redraw = true;
        }
    }
}

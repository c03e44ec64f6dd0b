use tui_select::{
    ClickTarget, SelectEvent, SelectKey, SelectOption, SelectProps, SelectState, SelectValue,
};

/// A caller that owns the value, the way a host application would.
struct Form {
    options: Vec<SelectOption>,
    multiple: bool,
    value: SelectValue,
    state: SelectState,
    calls: Vec<SelectValue>,
}

impl Form {
    fn new(options: Vec<SelectOption>, value: SelectValue) -> Self {
        let multiple = value.is_multiple();
        let mut form = Self {
            options,
            multiple,
            value,
            state: SelectState::new(),
            calls: Vec::new(),
        };
        form.send(SelectEvent::Focus);
        form
    }

    fn send(&mut self, event: SelectEvent) {
        let props = SelectProps::new(&self.options, self.multiple, &self.value).unwrap();
        let mut calls = Vec::new();
        self.state.handle_event(&props, event, |next| calls.push(next));
        assert!(calls.len() <= 1, "on_change fired {} times", calls.len());
        if let Some(next) = calls.pop() {
            self.value = next.clone();
            self.calls.push(next);
        }
    }

    fn key(&mut self, key: SelectKey) {
        self.send(SelectEvent::Key(key));
    }

    fn click(&mut self, target: ClickTarget) {
        self.send(SelectEvent::Click(target));
    }
}

fn a() -> SelectOption {
    SelectOption::new("A", 1)
}

fn b() -> SelectOption {
    SelectOption::new("B", 2)
}

fn c() -> SelectOption {
    SelectOption::new("C", 3)
}

#[test]
fn single_mode_keyboard_walkthrough() {
    let mut form = Form::new(vec![a(), b(), c()], SelectValue::Single(None));

    form.click(ClickTarget::Container);
    assert!(form.state.is_open());
    assert_eq!(form.state.highlighted_index(), 0);

    form.key(SelectKey::Down);
    assert_eq!(form.state.highlighted_index(), 1);

    form.key(SelectKey::Enter);
    assert_eq!(form.calls, vec![SelectValue::Single(Some(b()))]);
    assert!(!form.state.is_open());
}

#[test]
fn multiple_mode_badge_and_list() {
    let mut form = Form::new(vec![a(), b()], SelectValue::Multiple(vec![a()]));
    form.click(ClickTarget::Badge(0));
    assert_eq!(form.calls, vec![SelectValue::Multiple(vec![])]);

    let mut form = Form::new(vec![a(), b()], SelectValue::Multiple(vec![a()]));
    form.click(ClickTarget::Container);
    form.click(ClickTarget::Option(1));
    assert_eq!(form.calls, vec![SelectValue::Multiple(vec![a(), b()])]);
}

#[test]
fn clear_button_per_mode() {
    let mut form = Form::new(vec![a(), b()], SelectValue::Multiple(vec![a(), b()]));
    form.click(ClickTarget::ClearButton);
    assert_eq!(form.calls, vec![SelectValue::Multiple(vec![])]);
    assert!(!form.state.is_open());

    let mut form = Form::new(vec![a(), b()], SelectValue::Single(Some(a())));
    form.click(ClickTarget::ClearButton);
    assert_eq!(form.calls, vec![SelectValue::Single(None)]);
}

#[test]
fn reopening_always_starts_at_the_top() {
    for len in 1..6 {
        let options: Vec<_> = (0..len)
            .map(|i| SelectOption::new(format!("Option {i}"), i))
            .collect();
        let mut form = Form::new(options, SelectValue::Single(None));

        form.key(SelectKey::Down);
        for _ in 0..len {
            form.key(SelectKey::Down);
        }
        form.key(SelectKey::Escape);
        form.key(SelectKey::Up);
        assert!(form.state.is_open());
        assert_eq!(form.state.highlighted_index(), 0);
    }
}

#[test]
fn arrow_keys_stay_in_bounds() {
    let mut form = Form::new(vec![a(), b(), c()], SelectValue::Single(None));
    form.key(SelectKey::Down);

    let script = [
        SelectKey::Up,
        SelectKey::Down,
        SelectKey::Down,
        SelectKey::Down,
        SelectKey::Down,
        SelectKey::Up,
        SelectKey::Up,
        SelectKey::Up,
        SelectKey::Up,
    ];
    for key in script {
        form.key(key);
        assert!(form.state.highlighted_index() < 3);
    }
    assert_eq!(form.state.highlighted_index(), 0);
}

#[test]
fn single_mode_reselect_is_silent() {
    let mut form = Form::new(vec![a(), b()], SelectValue::Single(Some(a())));
    form.click(ClickTarget::Container);
    form.click(ClickTarget::Option(0));
    assert!(form.calls.is_empty());
    assert!(!form.state.is_open());

    form.click(ClickTarget::Container);
    form.click(ClickTarget::Option(1));
    assert_eq!(form.calls, vec![SelectValue::Single(Some(b()))]);
}

#[test]
fn multiple_mode_keeps_selection_order() {
    let mut form = Form::new(vec![a(), b(), c()], SelectValue::Multiple(vec![]));
    for index in [2, 0, 1] {
        form.click(ClickTarget::Container);
        form.click(ClickTarget::Option(index));
    }
    assert_eq!(form.value, SelectValue::Multiple(vec![c(), a(), b()]));

    form.click(ClickTarget::Badge(1));
    assert_eq!(form.value, SelectValue::Multiple(vec![c(), b()]));
}

#[test]
fn escape_and_blur_close_from_any_state() {
    for start_open in [false, true] {
        let mut form = Form::new(vec![a(), b()], SelectValue::Single(None));
        if start_open {
            form.key(SelectKey::Enter);
        }
        form.key(SelectKey::Escape);
        assert!(!form.state.is_open());

        if start_open {
            form.key(SelectKey::Enter);
        }
        form.send(SelectEvent::Blur);
        assert!(!form.state.is_open());
    }
}

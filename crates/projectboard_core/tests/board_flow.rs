use projectboard_core::{
    BoardConfig, MemoryDocument, ProjectBoard, Renderer, INVALID_INPUT_ALERT,
};
use std::rc::Rc;

struct Harness {
    document: Rc<MemoryDocument>,
    board: ProjectBoard<MemoryDocument>,
}

impl Harness {
    fn start() -> Self {
        let document = Rc::new(MemoryDocument::project_board());
        let board = ProjectBoard::start(Rc::clone(&document), &BoardConfig::default()).unwrap();
        Self { document, board }
    }

    fn submit(&self, title: &str, description: &str, people: &str) {
        let form = self.board.input();
        self.document.set_input_value(form.title_input(), title);
        self.document
            .set_input_value(form.description_input(), description);
        self.document.set_input_value(form.people_input(), people);
        assert!(self.document.dispatch_submit(*form.element()));
    }

    fn input_values(&self) -> [String; 3] {
        let form = self.board.input();
        [
            self.document.value(*form.title_input()),
            self.document.value(*form.description_input()),
            self.document.value(*form.people_input()),
        ]
    }

    fn list(&self, id: &str) -> Vec<String> {
        self.document
            .list_items(self.document.find_by_id(id).unwrap())
    }
}

#[test]
fn valid_submission_reaches_the_active_list_and_clears_inputs() {
    let harness = Harness::start();

    harness.submit("Build API", "REST service", "3");

    assert!(harness.document.alerts().is_empty());
    assert_eq!(harness.board.store().len(), 1);
    assert_eq!(harness.list("active-projects-list"), vec!["Build API"]);
    assert!(harness.list("finished-projects-list").is_empty());
    assert_eq!(harness.input_values(), [String::new(), String::new(), String::new()]);
}

#[test]
fn invalid_submission_alerts_and_keeps_inputs() {
    let harness = Harness::start();

    harness.submit("", "X", "3");

    assert_eq!(harness.document.alerts(), vec![INVALID_INPUT_ALERT]);
    assert!(harness.board.store().is_empty());
    assert_eq!(
        harness.input_values(),
        [String::new(), "X".to_string(), "3".to_string()]
    );
    assert!(harness.list("active-projects-list").is_empty());
}

#[test]
fn headcount_boundary_is_nine() {
    let harness = Harness::start();

    harness.submit("Max team", "nine people", "9");
    assert_eq!(harness.board.store().len(), 1);
    assert!(harness.document.alerts().is_empty());

    harness.submit("Too big", "ten people", "10");
    assert_eq!(harness.board.store().len(), 1);
    assert_eq!(harness.document.alerts(), vec![INVALID_INPUT_ALERT]);
}

#[test]
fn lists_accumulate_in_submission_order() {
    let harness = Harness::start();

    harness.submit("First", "a", "1");
    harness.submit("Second", "b", "2");
    harness.submit("Third", "c", "3");

    assert_eq!(
        harness.list("active-projects-list"),
        vec!["First", "Second", "Third"]
    );
    assert_eq!(harness.board.active_list().assigned_projects().len(), 3);
    assert!(harness.board.finished_list().assigned_projects().is_empty());
}

#[test]
fn headings_are_rendered_at_start() {
    let harness = Harness::start();

    let active = harness.document.find_by_id("active-projects").unwrap();
    let finished = harness.document.find_by_id("finished-projects").unwrap();
    assert_eq!(harness.document.text(active), "ACTIVE PROJECTS");
    assert_eq!(harness.document.text(finished), "FINISHED PROJECTS");
}

#[test]
fn missing_template_aborts_startup() {
    let document = Rc::new(MemoryDocument::new());
    document.create_host("app");

    let err = ProjectBoard::start(document, &BoardConfig::default())
        .err()
        .unwrap();
    assert!(err.to_string().contains("project-input"));
}

#[test]
fn headcount_accepts_integral_decimals_only() {
    let harness = Harness::start();

    harness.submit("Three", "decimal spelling", "3.0");
    assert_eq!(harness.board.store().len(), 1);
    assert_eq!(harness.board.store().projects()[0].people_count(), 3);

    harness.submit("Fraction", "not whole", "3.5");
    assert_eq!(harness.board.store().len(), 1);
    assert_eq!(harness.document.alerts().len(), 1);

    harness.submit("Nine", "upper bound", "9.0");
    assert_eq!(harness.board.store().len(), 2);

    harness.submit("Ten", "over the bound", "10.0");
    assert_eq!(harness.board.store().len(), 2);
    assert_eq!(harness.document.alerts().len(), 2);
    assert_eq!(harness.list("active-projects-list"), vec!["Three", "Nine"]);
}

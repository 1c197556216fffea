use super::generator::{self, Operator, Problem};

/// One printable sheet: a problem sequence plus the number shown on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub problems: Vec<Problem>,
    pub display_number: u32,
}

/// The in-memory worksheet document: an ordered page list, the active
/// operator and problem count, and which page the preview shows.
///
/// Content is ephemeral — it lives only as long as the app session.
#[derive(Debug, Clone)]
pub struct Worksheet {
    pages: Vec<Page>,
    operator: Operator,
    problem_count: usize,
    current: usize,
}

impl Worksheet {
    /// Create a worksheet with a single freshly generated page.
    pub fn new(operator: Operator, problem_count: usize) -> Self {
        Self {
            pages: vec![Page {
                problems: generator::generate(operator, problem_count),
                display_number: 1,
            }],
            operator,
            problem_count,
            current: 0,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> &Page {
        &self.pages[self.current]
    }

    /// Switch operator and regenerate every page's problems with the
    /// current count. Page count and display numbers are untouched.
    pub fn set_operator(&mut self, operator: Operator) {
        self.operator = operator;
        self.regenerate_all();
    }

    /// Change the per-page problem count and regenerate every page's
    /// problems with the current operator.
    pub fn set_problem_count(&mut self, count: usize) {
        self.problem_count = count;
        self.regenerate_all();
    }

    /// Append a page with fresh problems, numbered after the last page,
    /// and select it.
    pub fn add_page(&mut self) {
        let display_number = self.pages.len() as u32 + 1;
        self.pages.push(Page {
            problems: generator::generate(self.operator, self.problem_count),
            display_number,
        });
        self.current = self.pages.len() - 1;
    }

    /// Re-sample every page's problems without changing operator or count.
    pub fn regenerate_all(&mut self) {
        for page in &mut self.pages {
            page.problems = generator::generate(self.operator, self.problem_count);
        }
    }

    /// Select a page by index, clamped to the valid range.
    pub fn select_page(&mut self, index: usize) {
        self.current = index.min(self.pages.len() - 1);
    }

    pub fn next_page(&mut self) {
        if self.current + 1 < self.pages.len() {
            self.current += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.current = self.current.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_worksheet_has_one_page() {
        let sheet = Worksheet::new(Operator::Add, 25);
        assert_eq!(sheet.page_count(), 1);
        assert_eq!(sheet.pages()[0].display_number, 1);
        assert_eq!(sheet.pages()[0].problems.len(), 25);
        assert_eq!(sheet.current_index(), 0);
    }

    #[test]
    fn test_set_operator_replaces_problems_on_every_page() {
        let mut sheet = Worksheet::new(Operator::Add, 10);
        sheet.add_page();
        sheet.add_page();

        sheet.set_operator(Operator::Multiply);

        assert_eq!(sheet.page_count(), 3);
        for (i, page) in sheet.pages().iter().enumerate() {
            assert_eq!(page.display_number, i as u32 + 1);
            assert_eq!(page.problems.len(), 10);
            assert!(page.problems.iter().all(|p| p.operator == Operator::Multiply));
        }
    }

    #[test]
    fn test_set_problem_count_replaces_problems_on_every_page() {
        let mut sheet = Worksheet::new(Operator::Add, 10);
        sheet.add_page();

        sheet.set_problem_count(4);

        assert_eq!(sheet.page_count(), 2);
        for page in sheet.pages() {
            assert_eq!(page.problems.len(), 4);
            assert!(page.problems.iter().all(|p| p.operator == Operator::Add));
        }
        assert_eq!(sheet.pages()[1].display_number, 2);
    }

    #[test]
    fn test_add_page_appends_and_selects() {
        let mut sheet = Worksheet::new(Operator::Subtract, 5);
        sheet.add_page();
        sheet.add_page();

        assert_eq!(sheet.page_count(), 3);
        assert_eq!(sheet.pages()[2].display_number, 3);
        assert_eq!(sheet.current_index(), 2);
        assert_eq!(sheet.current_page().problems.len(), 5);
    }

    #[test]
    fn test_regenerate_all_keeps_shape() {
        let mut sheet = Worksheet::new(Operator::Divide, 25);
        sheet.add_page();

        sheet.regenerate_all();

        assert_eq!(sheet.page_count(), 2);
        for page in sheet.pages() {
            assert_eq!(page.problems.len(), 25);
            assert!(page.problems.iter().all(|p| p.operator == Operator::Divide));
        }
    }

    #[test]
    fn test_page_navigation_clamps() {
        let mut sheet = Worksheet::new(Operator::Add, 5);
        sheet.add_page();

        sheet.prev_page();
        assert_eq!(sheet.current_index(), 0);
        sheet.prev_page();
        assert_eq!(sheet.current_index(), 0);

        sheet.next_page();
        assert_eq!(sheet.current_index(), 1);
        sheet.next_page();
        assert_eq!(sheet.current_index(), 1);

        sheet.select_page(99);
        assert_eq!(sheet.current_index(), 1);
    }
}

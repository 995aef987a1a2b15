//! Route table and back-stack navigation.

/// A named screen destination in the navigation graph.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Route {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Language selection screen.
    LanguageSelection,
    /// Placeholder home screen, terminal in this flow.
    Home,
}

/// Owns the current route and the back-stack.
///
/// Constructed once at the application root and passed into the UI
/// loop. Navigation over the closed route set is always valid, so no
/// operation here is fallible.
#[derive(Debug)]
pub struct Navigator {
    current: Route,
    /// Routes beneath the current one, oldest first.
    back_stack: Vec<Route>,
}

impl Navigator {
    /// Creates a navigator positioned at the start destination.
    pub fn new() -> Self {
        Self {
            current: Route::Splash,
            back_stack: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    #[allow(unused)]
    pub fn back_stack(&self) -> &[Route] {
        &self.back_stack
    }

    /// Whether the given route can still be reached by back-navigation.
    #[allow(unused)]
    pub fn can_return_to(&self, route: Route) -> bool {
        self.back_stack.contains(&route)
    }

    /// Navigates to `target`, optionally popping history back through
    /// and including `pop_inclusive` first.
    ///
    /// With an inclusive pop, the popped routes become unreachable via
    /// back-navigation; entries beneath the popped route are kept. A
    /// pop target that is not on the stack pops nothing.
    pub fn navigate(&mut self, target: Route, pop_inclusive: Option<Route>) {
        match pop_inclusive {
            Some(route) if route == self.current => {
                self.current = target;
            }
            Some(route) => match self.back_stack.iter().rposition(|r| *r == route) {
                Some(pos) => {
                    self.back_stack.truncate(pos);
                    self.current = target;
                }
                None => {
                    self.back_stack.push(self.current);
                    self.current = target;
                }
            },
            None => {
                self.back_stack.push(self.current);
                self.current = target;
            }
        }
    }

    /// Back-navigation: returns to the previous route, or reports
    /// `None` (leaving the stack untouched) when there is no history.
    pub fn pop(&mut self) -> Option<Route> {
        let previous = self.back_stack.pop()?;
        self.current = previous;
        Some(previous)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A scope shared between the frame evaluating in it and every closure
/// created while it was active.
pub type Env = Rc<RefCell<Environment>>;

#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self {
            store: HashMap::new(),
            outer: Some(Rc::clone(outer)),
        }))
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        self.store
            .get(name)
            .cloned()
            .or_else(|| self.outer.as_ref()?.borrow().get(name))
    }

    /// Binds in this scope only; an outer binding of the same name is shadowed,
    /// never overwritten.
    pub fn set(&mut self, name: &str, val: Object) -> Object {
        self.store.insert(name.to_owned(), val.clone());
        val
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let env = Environment::new();

        assert_eq!(env.borrow().get("x"), None);
        assert_eq!(env.borrow_mut().set("x", 5.into()), Object::Integer(5));
        assert_eq!(env.borrow().get("x"), Some(Object::Integer(5)));

        env.borrow_mut().set("x", true.into());
        assert_eq!(env.borrow().get("x"), Some(Object::Boolean(true)));
    }

    #[test]
    fn test_enclosed_lookup_walks_outward() {
        let global = Environment::new();
        global.borrow_mut().set("a", 1.into());

        let middle = Environment::new_enclosed(&global);
        middle.borrow_mut().set("b", 2.into());

        let inner = Environment::new_enclosed(&middle);

        assert_eq!(inner.borrow().get("a"), Some(Object::Integer(1)));
        assert_eq!(inner.borrow().get("b"), Some(Object::Integer(2)));
        assert_eq!(inner.borrow().get("c"), None);
        assert_eq!(global.borrow().get("b"), None);
    }

    #[test]
    fn test_set_shadows_outer() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", 1.into());

        let inner = Environment::new_enclosed(&outer);
        inner.borrow_mut().set("x", 2.into());

        assert_eq!(inner.borrow().get("x"), Some(Object::Integer(2)));
        assert_eq!(outer.borrow().get("x"), Some(Object::Integer(1)));
    }

    #[test]
    fn test_outer_changes_are_visible() {
        let outer = Environment::new();
        let inner = Environment::new_enclosed(&outer);

        outer.borrow_mut().set("late", 9.into());
        assert_eq!(inner.borrow().get("late"), Some(Object::Integer(9)));
    }
}

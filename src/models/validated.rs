// 🛡️ Validated Record - private storage behind checked accessors
//
// Every write goes through a setter that validates first and stores second.
// Salary writes additionally notify observers, but only when the value changes.
//
// Thread safety: observers are plain boxed closures invoked inline, so the
// record is neither Send nor Sync. Callers that share one across threads must
// serialize access themselves.

use crate::error::{ModelError, Result};
use rust_decimal::Decimal;
use std::fmt;

// ============================================================================
// SALARY CHANGE EVENT
// ============================================================================

/// Payload delivered to salary observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryChanged {
    pub old_salary: Decimal,
    pub new_salary: Decimal,
}

/// Handle returned by `on_salary_changed`, used to detach the observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type SalaryObserver = Box<dyn FnMut(&SalaryChanged)>;

// ============================================================================
// VALIDATED RECORD
// ============================================================================

pub struct ValidatedRecord {
    age: i32,
    name: String,
    salary: Decimal,

    // Registration order is delivery order
    observers: Vec<(ObserverId, SalaryObserver)>,
    next_observer_id: u64,
}

impl ValidatedRecord {
    /// Build a record from (name, age, salary).
    ///
    /// All three values are validated before anything is built, in that
    /// order; the first failure is returned and no record exists.
    pub fn new(name: &str, age: i32, salary: Decimal) -> Result<Self> {
        let name = validate_name(name)?;
        validate_age(age)?;
        validate_salary(salary)?;

        Ok(ValidatedRecord {
            age,
            name,
            salary,
            observers: Vec::new(),
            next_observer_id: 0,
        })
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) -> Result<()> {
        validate_age(age)?;
        self.age = age;
        Ok(())
    }

    /// Stored name, always trimmed
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn salary(&self) -> Decimal {
        self.salary
    }

    /// Store a new salary.
    ///
    /// Observers run synchronously, before this returns, and only when the
    /// new value differs from the stored one.
    pub fn set_salary(&mut self, salary: Decimal) -> Result<()> {
        validate_salary(salary)?;

        let old = self.salary;
        self.salary = salary;

        if old == salary {
            tracing::trace!(%salary, "salary unchanged, no notification");
            return Ok(());
        }

        let event = SalaryChanged {
            old_salary: old,
            new_salary: salary,
        };
        tracing::debug!(
            old = %event.old_salary,
            new = %event.new_salary,
            observers = self.observers.len(),
            "salary changed"
        );
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }

        Ok(())
    }

    /// "{name} (Age: {age})"
    pub fn display_name(&self) -> String {
        format!("{} (Age: {})", self.name, self.age)
    }

    /// Attach a salary observer; returns the handle to detach it later
    pub fn on_salary_changed<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&SalaryChanged) + 'static,
    {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Detach an observer. Unknown ids are ignored and yield `false`.
    pub fn remove_salary_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for ValidatedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedRecord")
            .field("age", &self.age)
            .field("name", &self.name)
            .field("salary", &self.salary)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// ============================================================================
// FIELD RULES
// ============================================================================

fn validate_age(age: i32) -> Result<()> {
    if age < 0 {
        return Err(ModelError::range("age", age, "age cannot be negative"));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ModelError::argument("name", "name cannot be empty"));
    }
    Ok(trimmed.to_string())
}

fn validate_salary(salary: Decimal) -> Result<()> {
    if salary < Decimal::ZERO {
        return Err(ModelError::range("salary", salary, "salary cannot be negative"));
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn record() -> ValidatedRecord {
        ValidatedRecord::new("Ada", 36, Decimal::from(1000)).unwrap()
    }

    fn recorder(record: &mut ValidatedRecord) -> (ObserverId, Rc<RefCell<Vec<SalaryChanged>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = record.on_salary_changed(move |event| sink.borrow_mut().push(*event));
        (id, seen)
    }

    #[test]
    fn test_record_creation() {
        let record = ValidatedRecord::new("  Ada Lovelace ", 36, Decimal::new(150050, 2)).unwrap();

        assert_eq!(record.name(), "Ada Lovelace");
        assert_eq!(record.age(), 36);
        assert_eq!(record.salary(), Decimal::new(150050, 2));
        assert_eq!(record.observer_count(), 0);
    }

    #[test]
    fn test_display_name() {
        let mut record = record();
        assert_eq!(record.display_name(), "Ada (Age: 36)");

        record.set_age(37).unwrap();
        assert_eq!(record.display_name(), "Ada (Age: 37)");
    }

    #[test]
    fn test_negative_age_rejected() {
        let mut record = record();

        for age in [-1, -42, i32::MIN] {
            let err = record.set_age(age).unwrap_err();
            assert!(err.is_range());
            assert_eq!(err.field(), "age");
        }
        assert_eq!(record.age(), 36);

        for age in [0, 1, 120, i32::MAX] {
            record.set_age(age).unwrap();
            assert_eq!(record.age(), age);
        }
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut record = record();

        for name in ["", " ", "   ", "\t\n", "\u{3000}"] {
            let err = record.set_name(name).unwrap_err();
            assert!(err.is_argument());
            assert_eq!(err.field(), "name");
        }
        assert_eq!(record.name(), "Ada");

        record.set_name("  Grace Hopper\t").unwrap();
        assert_eq!(record.name(), "Grace Hopper");

        record.set_name("x").unwrap();
        assert_eq!(record.name(), "x");
    }

    #[test]
    fn test_negative_salary_rejected() {
        let mut record = record();

        let err = record.set_salary(Decimal::new(-1, 2)).unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.field(), "salary");
        assert_eq!(record.salary(), Decimal::from(1000));

        record.set_salary(Decimal::ZERO).unwrap();
        assert_eq!(record.salary(), Decimal::ZERO);
    }

    #[test]
    fn test_construction_is_atomic() {
        let err = ValidatedRecord::new("   ", 30, Decimal::from(10)).unwrap_err();
        assert!(err.is_argument());

        let err = ValidatedRecord::new("Ada", -1, Decimal::from(10)).unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.field(), "age");

        let err = ValidatedRecord::new("Ada", 30, Decimal::from(-10)).unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.field(), "salary");
    }

    #[test]
    fn test_construction_reports_first_failure() {
        // name is checked before age and salary
        let err = ValidatedRecord::new("", -1, Decimal::from(-1)).unwrap_err();
        assert_eq!(err.field(), "name");

        let err = ValidatedRecord::new("Ada", -1, Decimal::from(-1)).unwrap_err();
        assert_eq!(err.field(), "age");
    }

    #[test]
    fn test_same_salary_does_not_notify() {
        let mut record = record();
        let (_, seen) = recorder(&mut record);

        record.set_salary(Decimal::from(1000)).unwrap();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_salary_change_notifies_once() {
        let mut record = record();
        let (_, seen) = recorder(&mut record);

        record.set_salary(Decimal::from(1200)).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0],
            SalaryChanged {
                old_salary: Decimal::from(1000),
                new_salary: Decimal::from(1200),
            }
        );
    }

    #[test]
    fn test_rejected_salary_does_not_notify() {
        let mut record = record();
        let (_, seen) = recorder(&mut record);

        assert!(record.set_salary(Decimal::from(-5)).is_err());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_observers_run_in_registration_order() {
        let mut record = record();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            record.on_salary_changed(move |_| order.borrow_mut().push(tag));
        }

        record.set_salary(Decimal::from(2000)).unwrap();
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_remove_observer() {
        let mut record = record();
        let (first, first_seen) = recorder(&mut record);
        let (_, second_seen) = recorder(&mut record);
        assert_eq!(record.observer_count(), 2);

        assert!(record.remove_salary_observer(first));
        assert_eq!(record.observer_count(), 1);

        record.set_salary(Decimal::from(1100)).unwrap();
        assert!(first_seen.borrow().is_empty());
        assert_eq!(second_seen.borrow().len(), 1);
    }

    #[test]
    fn test_remove_unknown_observer_is_noop() {
        let mut record = record();
        let (id, _) = recorder(&mut record);

        assert!(record.remove_salary_observer(id));
        assert!(!record.remove_salary_observer(id));
        assert!(!record.remove_salary_observer(ObserverId(999)));
        assert_eq!(record.observer_count(), 0);
    }

    #[test]
    fn test_observer_ids_are_unique() {
        let mut record = record();
        let a = record.on_salary_changed(|_| {});
        let b = record.on_salary_changed(|_| {});
        record.remove_salary_observer(a);
        let c = record.on_salary_changed(|_| {});

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_successive_changes_track_old_value() {
        let mut record = record();
        let (_, seen) = recorder(&mut record);

        record.set_salary(Decimal::from(1200)).unwrap();
        record.set_salary(Decimal::from(1200)).unwrap();
        record.set_salary(Decimal::from(900)).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].old_salary, Decimal::from(1200));
        assert_eq!(seen[1].new_salary, Decimal::from(900));
    }
}

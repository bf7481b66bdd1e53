//! Undo/Redo für Kurven-Bearbeitungen.

use glam::DVec2;
use nurbs_path_engine::{BackgroundPlacement, CurveError, CurveEvaluator};

/// Eingabezustand der Kurve; die Samples leiten sich daraus ab.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSnapshot {
    pub control_points: Vec<DVec2>,
    pub degree: usize,
    pub steps: usize,
    pub background: BackgroundPlacement,
}

impl CurveSnapshot {
    /// Hält die aktuellen Eingaben des Evaluators fest.
    pub fn capture(curve: &CurveEvaluator) -> Self {
        Self {
            control_points: curve.control_points().to_vec(),
            degree: curve.degree(),
            steps: curve.steps(),
            background: curve.background(),
        }
    }

    /// Stellt den Zustand über die Setter wieder her (markiert nur bei Änderung dirty).
    pub fn restore(self, curve: &mut CurveEvaluator) -> Result<(), CurveError> {
        curve.set_control_points(self.control_points)?;
        curve.set_degree(self.degree)?;
        curve.set_steps(self.steps)?;
        curve.set_background_anchor(self.background.anchor);
        curve.set_background_size(self.background.size);
        Ok(())
    }
}

/// Undo/Redo-Stapel mit begrenzter Tiefe.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<CurveSnapshot>,
    redo_stack: Vec<CurveSnapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Standard-Tiefe für den App-State.
    pub const DEFAULT_DEPTH: usize = 200;

    /// Erstellt eine leere History mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Legt den Zustand vor einer Änderung ab und verwirft die Redo-Schritte.
    pub fn record_snapshot(&mut self, snapshot: CurveSnapshot) {
        push_bounded(&mut self.undo_stack, snapshot, self.max_depth);
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl möglicher Undo-Schritte.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Nimmt den letzten Undo-Schritt; `current` wandert auf den Redo-Stapel.
    pub fn pop_undo_with_current(&mut self, current: CurveSnapshot) -> Option<CurveSnapshot> {
        let previous = self.undo_stack.pop()?;
        push_bounded(&mut self.redo_stack, current, self.max_depth);
        Some(previous)
    }

    /// Nimmt den letzten Redo-Schritt; `current` wandert auf den Undo-Stapel.
    pub fn pop_redo_with_current(&mut self, current: CurveSnapshot) -> Option<CurveSnapshot> {
        let next = self.redo_stack.pop()?;
        push_bounded(&mut self.undo_stack, current, self.max_depth);
        Some(next)
    }

    /// Verwirft alle Schritte (z.B. nach dem Laden eines Dokuments).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

fn push_bounded(stack: &mut Vec<CurveSnapshot>, snapshot: CurveSnapshot, max_depth: usize) {
    if max_depth == 0 {
        return;
    }
    if stack.len() >= max_depth {
        stack.remove(0);
    }
    stack.push(snapshot);
}

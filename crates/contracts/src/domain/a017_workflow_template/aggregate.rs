use crate::shared::export::CsvExportable;
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use serde::{Deserialize, Serialize};

/// Business area a template belongs to; used as the list's enum filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowArea {
    Accounting,
    HumanResources,
    Purchasing,
    Sales,
}

crate::status_display!(WorkflowArea {
    Accounting => ("accounting", "Comptabilité", Primary),
    HumanResources => ("hr", "Ressources humaines", Success),
    Purchasing => ("purchasing", "Achats", Warning),
    Sales => ("sales", "Ventes", Neutral),
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub order: u32,
    pub name: String,
    /// Role responsible for the step, e.g. "Chef comptable".
    pub role: String,
}

/// Static description of an approval circuit. Rendered as a diagram, never
/// executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub area: WorkflowArea,
    pub steps: Vec<WorkflowStep>,
}

impl WorkflowTemplate {
    /// Steps by ascending `order`.
    pub fn ordered_steps(&self) -> Vec<&WorkflowStep> {
        let mut steps: Vec<&WorkflowStep> = self.steps.iter().collect();
        steps.sort_by_key(|s| s.order);
        steps
    }
}

impl Searchable for WorkflowTemplate {
    type Status = WorkflowArea;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.steps.iter().map(|s| s.role.as_str()));
        fields
    }

    fn status(&self) -> WorkflowArea {
        self.area
    }
}

impl CsvExportable for WorkflowTemplate {
    fn headers() -> Vec<&'static str> {
        vec!["Modèle", "Domaine", "Étapes"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let steps: Vec<String> = self
            .ordered_steps()
            .iter()
            .map(|s| format!("{} ({})", s.name, s.role))
            .collect();
        vec![
            self.name.clone(),
            self.area.label().to_string(),
            steps.join(" > "),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_ordered() {
        let template = WorkflowTemplate {
            id: "wf".into(),
            name: "Validation facture fournisseur".into(),
            description: String::new(),
            area: WorkflowArea::Purchasing,
            steps: vec![
                WorkflowStep { order: 2, name: "Contrôle".into(), role: "Comptable".into() },
                WorkflowStep { order: 1, name: "Saisie".into(), role: "Assistant".into() },
            ],
        };
        let names: Vec<&str> = template.ordered_steps().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Saisie", "Contrôle"]);
        assert!(template.matches_filter("assistant"));
        assert_eq!(template.to_csv_row()[2], "Saisie (Assistant) > Contrôle (Comptable)");
    }
}

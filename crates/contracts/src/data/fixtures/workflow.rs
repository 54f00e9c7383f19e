use crate::domain::a017_workflow_template::{WorkflowArea, WorkflowStep, WorkflowTemplate};

fn steps(names: &[(&str, &str)]) -> Vec<WorkflowStep> {
    names
        .iter()
        .zip(1u32..)
        .map(|((name, role), order)| WorkflowStep {
            order,
            name: name.to_string(),
            role: role.to_string(),
        })
        .collect()
}

pub fn workflow_templates() -> Vec<WorkflowTemplate> {
    vec![
        WorkflowTemplate {
            id: "wf-001".to_string(),
            name: "Validation facture fournisseur".to_string(),
            description: "Rapprochement bon de commande, réception et facture avant mise en paiement.".to_string(),
            area: WorkflowArea::Accounting,
            steps: steps(&[
                ("Saisie de la facture", "Comptable"),
                ("Rapprochement BC / réception", "Acheteur"),
                ("Bon à payer", "Directeur administratif et financier"),
                ("Mise en paiement", "Trésorier"),
            ]),
        },
        WorkflowTemplate {
            id: "wf-002".to_string(),
            name: "Demande de congés".to_string(),
            description: "Circuit d'approbation des congés payés.".to_string(),
            area: WorkflowArea::HumanResources,
            steps: steps(&[
                ("Demande", "Salarié"),
                ("Avis du responsable", "Manager"),
                ("Validation RH", "Responsable RH"),
            ]),
        },
        WorkflowTemplate {
            id: "wf-003".to_string(),
            name: "Demande d'achat".to_string(),
            description: "De l'expression du besoin à l'émission du bon de commande.".to_string(),
            area: WorkflowArea::Purchasing,
            steps: steps(&[
                ("Expression du besoin", "Demandeur"),
                ("Contrôle budgétaire", "Contrôleur de gestion"),
                ("Consultation fournisseurs", "Acheteur"),
                ("Approbation", "Direction générale"),
                ("Émission du bon de commande", "Acheteur"),
            ]),
        },
        WorkflowTemplate {
            id: "wf-004".to_string(),
            name: "Remise commerciale exceptionnelle".to_string(),
            description: "Accord préalable pour toute remise supérieure à 10 %.".to_string(),
            area: WorkflowArea::Sales,
            steps: steps(&[
                ("Proposition", "Commercial"),
                ("Validation", "Directeur commercial"),
            ]),
        },
        WorkflowTemplate {
            id: "wf-005".to_string(),
            name: "Procédure disciplinaire".to_string(),
            description: "Convocation, entretien préalable et notification de sanction.".to_string(),
            area: WorkflowArea::HumanResources,
            steps: steps(&[
                ("Ouverture du dossier", "Responsable RH"),
                ("Convocation à entretien", "Responsable RH"),
                ("Entretien préalable", "Manager"),
                ("Notification de la sanction", "Direction générale"),
            ]),
        },
    ]
}

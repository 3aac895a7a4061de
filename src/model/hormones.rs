/// Hormones offered by the prediction browser. This list is curated and does
/// not follow the key set of either lookup document.
pub const PREDICTION_HORMONES: &[&str] = &[
    "aldosterone",
    "angiotensin",
    "calcitonin",
    "cholecystokinin",
    "cortisol",
    "erythropoietin",
    "estrogen",
    "glucagon",
    "insulin",
    "leptin",
    "melatonin",
    "peptide yy",
    "progesterone",
    "prolactin",
    "prostaglandins",
    "relaxin",
    "somatostatin",
    "testosterone",
    "adrenocorticotropin",
    "thyrotropin-releasing hormone",
    "gonadotropin-releasing hormone",
    "vascular endothelial growth factor",
    "norepinephrine",
    "adiponectin",
    "a-type natriuretic peptide",
    "adrenaline/epinephrine",
    "estradiol/oestradiol",
    "somatotrophin/growth hormone",
    "parathyroid hormone/parathyrin",
    "serotonin/5-hydroxytryptamine",
    "vitamin d/calciferol",
    "follicle-stimulating hormone/follitropin",
    "antidiuretic hormone/vasopressin",
    "thymosin",
];

pub const DEFAULT_HORMONE: &str = "aldosterone";

pub fn is_prediction_hormone(key: &str) -> bool {
    PREDICTION_HORMONES.iter().any(|&h| h == key)
}

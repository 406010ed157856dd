use serde::Serialize;

/// A ready-made input for trying out the analysis
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExampleSequence {
    pub name: &'static str,
    pub description: &'static str,
    pub element_type: &'static str,
    pub sequence: &'static str,
}

pub static EXAMPLE_SEQUENCES: [ExampleSequence; 4] = [
    ExampleSequence {
        name: "Cardiac Enhancer",
        description: "A regulatory element active in cardiac tissue development",
        element_type: "enhancer",
        sequence: "ATGCGTACGTAGCTAGCTGATCGATCGTAGCTAGCTGATCGATCGTAGCTAGCTGATCGATCGTAGCTAGCTGATCGATCGTAGCTAGCTGATCGATCGTAGCTAGCTGATCGATCGTAGCTAGCTGATCGATCGTAGCTAGCTGATCGATCGTAGCTAGCTGATCGATCGTAGCTAGCTGATCGATCG",
    },
    ExampleSequence {
        name: "Promoter Region",
        description: "Contains TATA box and transcription start site",
        element_type: "promoter",
        sequence: "TATAAAAGGCCGCGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACG",
    },
    ExampleSequence {
        name: "Silencer Element",
        description: "Represses gene expression when bound by specific factors",
        element_type: "silencer",
        sequence: "GCGCGCATATATATAGCGCGCGCGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTA",
    },
    ExampleSequence {
        name: "CTCF Binding Site",
        description: "Chromatin organization and insulator function",
        element_type: "insulator",
        sequence: "CCGCGAGGAGGCAGCACCGCGAGGAGGCAGCACCGCGAGGAGGCAGCACCGCGAGGAGGCAGCACCGCGAGGAGGCAGCACCGCGAGGAGGCAGCACCGCGAGGAGGCAGCACCGCGAGGAGGCAGCACCGCGAGGAGGCAGCACCGCGAGGAGGCAGCACCGCGAGGAGGCAGCAC",
    },
];

/// Case-insensitive lookup by name
pub fn find_example(name: &str) -> Option<&'static ExampleSequence> {
    EXAMPLE_SEQUENCES
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
}

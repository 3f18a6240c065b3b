//! Static copy shown by the three modes and the About panel.

/// A titled block of prose.
pub struct TextSection {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const APP_TITLE: &str = "Gene Explorer: Hypothyroidism and Gene Expression Visualization";

pub const BACKGROUND_SECTIONS: &[TextSection] = &[
    TextSection {
        heading: "Genetic Basis of Hypothyroidism",
        body: "Hypothyroidism is a common endocrine disorder characterized by insufficient \
production of thyroid hormones. These hormones are crucial for regulating metabolism, growth, \
and development. The condition can be caused by various factors, including autoimmune diseases \
(e.g., Hashimoto's thyroiditis), iodine deficiency, and genetic mutations.\n\n\
Key genes involved:\n\
\u{2022} TSHR (Thyroid Stimulating Hormone Receptor): mutations in this gene can impair the \
thyroid gland's response to TSH, leading to hypothyroidism.\n\
\u{2022} PAX8 (Paired Box 8): this gene is essential for thyroid gland development. Mutations \
can result in congenital hypothyroidism.\n\
\u{2022} DUOX2 (Dual Oxidase 2): involved in the production of hydrogen peroxide, which is \
necessary for thyroid hormone synthesis. Mutations can disrupt this process.",
    },
    TextSection {
        heading: "Gene Expression Analysis",
        body: "Gene expression analysis is a powerful tool for understanding the molecular \
mechanisms underlying diseases. By measuring the activity of genes across different conditions \
or tissues, researchers can identify biomarkers, therapeutic targets, and pathways involved in \
disease progression.\n\n\
Applications:\n\
\u{2022} Biomarker discovery: identifying genes whose expression levels correlate with disease \
states.\n\
\u{2022} Pathway analysis: understanding the biological pathways affected by changes in gene \
expression.\n\
\u{2022} Drug development: discovering potential drug targets based on gene expression \
profiles.\n\n\
This app provides tools to explore gene-related data for hypothyroidism and visualize gene \
expression patterns, aiding in the understanding of the genetic and molecular basis of the \
disease.",
    },
];

pub const SEARCH_INTRO: &str = "Hypothyroidism is a condition in which the thyroid gland \
doesn't produce enough thyroid hormones. It can affect metabolism, energy levels, and overall \
health. The genetic basis of hypothyroidism includes mutations in various genes that play a \
role in thyroid function and development.\n\n\
Enter a gene name in the search bar to retrieve detailed information.";

pub const SEARCH_IMAGE_CAPTION: &str = "Healthy Thyroid vs Hypothyroidism";

pub const NO_MATCH_MESSAGE: &str = "No gene found with the provided name.";

pub const VISUALIZATION_INTRO: &str = "This tool visualizes gene expression data to help \
researchers analyze patterns and trends in gene activity. Upload your gene expression data \
file (CSV) or use the built-in sample dataset to explore visualizations.";

pub const HEATMAP_CAPTION: &str = "A heatmap is a graphical representation of data where \
individual values are represented by colors. This heatmap shows the expression levels of \
genes across different samples.";

pub const BAR_CAPTION: &str = "A bar plot shows the expression levels of a selected gene \
across different samples.";

pub const LINE_CAPTION: &str = "A line plot shows the expression trends of selected genes \
across different samples.";

pub const BOX_CAPTION: &str = "A box plot shows the distribution of gene expression levels \
across samples, highlighting the median, quartiles, and potential outliers.";

pub const ABOUT: &str = "Gene Explorer is a scientific tool that provides information about \
genes associated with hypothyroidism and visualizes gene expression data.\n\n\
\u{2022} Scientific Background: learn about the genetic and molecular basis of hypothyroidism \
and the importance of gene expression analysis.\n\
\u{2022} Hypothyroidism Gene Search: explore gene-related data for hypothyroidism.\n\
\u{2022} Gene Expression Visualization: analyze gene expression patterns using heatmaps, bar \
plots, line plots, and box plots.";

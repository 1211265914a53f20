//! C declarations of the output vocabulary
//!
//!     C consumers of the XML need the element and attribute names as constants. This module
//!     reflects over [Tag::ALL], [Attribute::ALL] and [YesNo::ALL] and emits, for each set, a
//!     struct with one `const char *` field per constant, an `extern` declaration and an
//!     initializer listing the values in field order:
//!
//!         struct XmlTag {
//!           const char *ROOT;
//!           ...
//!         };
//!         extern const struct XmlTag xmlTags;
//!         const struct XmlTag xmlTags = {
//!           "ucd", ...
//!         };

use nameslist_parser::nameslist::ast::{Attribute, Tag, YesNo};

/// One constant set: the C struct name, the instance name and its (field, value) pairs.
struct ConstantSet {
    comment: &'static str,
    struct_name: &'static str,
    instance: &'static str,
    fields: Vec<(&'static str, &'static str)>,
}

impl ConstantSet {
    fn declaration(&self) -> String {
        let fields: Vec<String> = self
            .fields
            .iter()
            .map(|(field, _)| format!("  const char *{};", field))
            .collect();
        format!(
            "\n/* {} */\nstruct {} {{\n{}\n}};\n",
            self.comment,
            self.struct_name,
            fields.join("\n")
        )
    }

    fn extern_declaration(&self) -> String {
        format!("extern const struct {} {};\n", self.struct_name, self.instance)
    }

    fn initializer(&self) -> String {
        let values: Vec<String> = self
            .fields
            .iter()
            .map(|(_, value)| format!("\"{}\"", value))
            .collect();
        format!(
            "\nconst struct {} {} = {{\n  {}\n}};\n",
            self.struct_name,
            self.instance,
            values.join(", ")
        )
    }
}

fn constant_sets() -> [ConstantSet; 3] {
    [
        ConstantSet {
            comment: "Constants containing XML tags",
            struct_name: "XmlTag",
            instance: "xmlTags",
            fields: Tag::ALL.iter().map(|t| (t.const_name(), t.as_str())).collect(),
        },
        ConstantSet {
            comment: "Constants containing XML attributes",
            struct_name: "XmlAttr",
            instance: "xmlAttrs",
            fields: Attribute::ALL
                .iter()
                .map(|a| (a.const_name(), a.as_str()))
                .collect(),
        },
        ConstantSet {
            comment: "Constants containing Yes/No values",
            struct_name: "YesNo",
            instance: "yesNoValues",
            fields: YesNo::ALL.iter().map(|v| (v.const_name(), v.as_str())).collect(),
        },
    ]
}

/// The full C source: struct declarations, extern declarations, then initializers.
pub fn c_declarations() -> String {
    let sets = constant_sets();
    let mut output = String::new();

    for set in &sets {
        output.push_str(&set.declaration());
    }
    output.push('\n');
    for set in &sets {
        output.push_str(&set.extern_declaration());
    }
    for set in &sets {
        output.push_str(&set.initializer());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_block() {
        let output = c_declarations();
        assert!(output.contains(
            "/* Constants containing Yes/No values */\nstruct YesNo {\n  const char *YES;\n  const char *NO;\n};\n"
        ));
        assert!(output.contains("\nconst struct YesNo yesNoValues = {\n  \"Y\", \"N\"\n};\n"));
    }

    #[test]
    fn test_extern_declarations_follow_structs() {
        let output = c_declarations();
        let externs = "\nextern const struct XmlTag xmlTags;\nextern const struct XmlAttr xmlAttrs;\nextern const struct YesNo yesNoValues;\n";
        let externs_at = output.find(externs).expect("extern block present");
        assert!(output.find("struct YesNo {").unwrap() < externs_at);
        assert!(output.find("const struct XmlTag xmlTags = {").unwrap() > externs_at);
    }

    #[test]
    fn test_every_constant_is_declared() {
        let output = c_declarations();
        for tag in Tag::ALL {
            assert!(output.contains(&format!("  const char *{};", tag.const_name())));
            assert!(output.contains(&format!("\"{}\"", tag.as_str())));
        }
        for attribute in Attribute::ALL {
            assert!(output.contains(&format!("  const char *{};", attribute.const_name())));
        }
    }

    #[test]
    fn test_initializer_order_matches_fields() {
        let output = c_declarations();
        assert!(output.contains("xmlTags = {\n  \"ucd\", \"block_header\", \"block_subheader\","));
        assert!(output.contains("xmlAttrs = {\n  \"block_start\", \"block_end\", \"code_point\","));
    }
}

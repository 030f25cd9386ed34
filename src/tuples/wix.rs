//! Toolchain-internal rows
//!
//! These kinds never reach the final installer database; the linker
//! consumes them to sequence actions, resolve references, and shape the
//! output tables.

tuple_definition! {
    /// Scheduling request for a standard or custom action
    WixAction => WIX_ACTION, WixActionTupleFields, WixActionTuple {
        SequenceTable / sequence_table / set_sequence_table : String,
        Action / action / set_action : String,
        Condition / condition / set_condition : opt String,
        Sequence / sequence / set_sequence : opt Number,
        Before / before / set_before : opt String,
        After / after / set_after : opt String,
        Overridable / overridable / set_overridable : Bool,
    }
}

tuple_definition! {
    /// Parent/child edge the linker uses to build feature trees
    WixComplexReference => WIX_COMPLEX_REFERENCE, WixComplexReferenceTupleFields, WixComplexReferenceTuple {
        Parent / parent / set_parent : String,
        ParentType / parent_type / set_parent_type : Number,
        ParentLanguage / parent_language / set_parent_language : opt String,
        Child / child / set_child : String,
        ChildType / child_type / set_child_type : Number,
        IsPrimary / is_primary / set_is_primary : Bool,
    }
}

tuple_definition! {
    /// Symbolic reference the linker must resolve before binding
    WixSimpleReference => WIX_SIMPLE_REFERENCE, WixSimpleReferenceTupleFields, WixSimpleReferenceTuple {
        Table / table / set_table : String,
        PrimaryKeys / primary_keys / set_primary_keys : String,
    }
}

tuple_definition! {
    /// Bind-time variable, substituted when the output is bound
    WixVariable => WIX_VARIABLE, WixVariableTupleFields, WixVariableTuple {
        Value / value / set_value : opt String,
        Overridable / overridable / set_overridable : Bool,
    }
}

tuple_definition! {
    /// Marks a property as admin, hidden, or secure at link time
    WixProperty => WIX_PROPERTY, WixPropertyTupleFields, WixPropertyTuple {
        PropertyRef / property_ref / set_property_ref : String,
        Admin / admin / set_admin : Bool,
        Hidden / hidden / set_hidden : Bool,
        Secure / secure / set_secure : Bool,
    }
}

tuple_definition! {
    /// Drop an action a library would otherwise schedule
    WixSuppressAction => WIX_SUPPRESS_ACTION, WixSuppressActionTupleFields, WixSuppressActionTuple {
        SequenceTable / sequence_table / set_sequence_table : String,
        Action / action / set_action : String,
    }
}

tuple_definition! {
    /// Relative-order constraint between two items of the same type
    WixOrdering => WIX_ORDERING, WixOrderingTupleFields, WixOrderingTuple {
        ItemType / item_type / set_item_type : String,
        ItemIdRef / item_id_ref / set_item_id_ref : String,
        DependsOnType / depends_on_type / set_depends_on_type : String,
        DependsOnIdRef / depends_on_id_ref / set_depends_on_id_ref : String,
    }
}

tuple_definition! {
    /// Force an (possibly empty) table into the output database
    WixEnsureTable => WIX_ENSURE_TABLE, WixEnsureTableTupleFields, WixEnsureTableTuple {
        Table / table / set_table : String,
    }
}

//! Installer UI: dialogs, controls, and their plumbing

tuple_definition! {
    /// A dialog box in the setup UI
    Dialog => DIALOG, DialogTupleFields, DialogTuple {
        /// Horizontal centering, percent of screen width
        HCentering / h_centering / set_h_centering : Number,
        VCentering / v_centering / set_v_centering : Number,
        Width / width / set_width : Number,
        Height / height / set_height : Number,
        CustomPalette / custom_palette / set_custom_palette : Bool,
        ErrorDialog / error_dialog / set_error_dialog : Bool,
        Visible / visible / set_visible : Bool,
        Modal / modal / set_modal : Bool,
        Title / title / set_title : opt String,
        FirstControlRef / first_control_ref / set_first_control_ref : opt String,
        DefaultControlRef / default_control_ref / set_default_control_ref : opt String,
        CancelControlRef / cancel_control_ref / set_cancel_control_ref : opt String,
    }
}

tuple_definition! {
    /// A control placed on a dialog
    Control => CONTROL, ControlTupleFields, ControlTuple {
        DialogRef / dialog_ref / set_dialog_ref : String,
        Control / control / set_control : String,
        Type / control_type / set_control_type : String,
        X / x / set_x : Number,
        Y / y / set_y : Number,
        Width / width / set_width : Number,
        Height / height / set_height : Number,
        Attributes / attributes / set_attributes : Number,
        Property / property / set_property : opt String,
        Text / text / set_text : opt String,
        NextControlRef / next_control_ref / set_next_control_ref : opt String,
        Help / help / set_help : opt String,
    }
}

tuple_definition! {
    /// Event published when a control is activated
    ControlEvent => CONTROL_EVENT, ControlEventTupleFields, ControlEventTuple {
        DialogRef / dialog_ref / set_dialog_ref : String,
        ControlRef / control_ref / set_control_ref : String,
        Event / event / set_event : String,
        Argument / argument / set_argument : String,
        Condition / condition / set_condition : opt String,
        Ordering / ordering / set_ordering : opt Number,
    }
}

tuple_definition! {
    ControlCondition => CONTROL_CONDITION, ControlConditionTupleFields, ControlConditionTuple {
        DialogRef / dialog_ref / set_dialog_ref : String,
        ControlRef / control_ref / set_control_ref : String,
        Action / action / set_action : String,
        Condition / condition / set_condition : String,
    }
}

tuple_definition! {
    /// Subscribe a control attribute to a runtime event
    EventMapping => EVENT_MAPPING, EventMappingTupleFields, EventMappingTuple {
        DialogRef / dialog_ref / set_dialog_ref : String,
        ControlRef / control_ref / set_control_ref : String,
        Event / event / set_event : String,
        Attribute / attribute / set_attribute : String,
    }
}

tuple_definition! {
    CheckBox => CHECK_BOX, CheckBoxTupleFields, CheckBoxTuple {
        Property / property / set_property : String,
        Value / value / set_value : opt String,
    }
}

tuple_definition! {
    ComboBox => COMBO_BOX, ComboBoxTupleFields, ComboBoxTuple {
        Property / property / set_property : String,
        Order / order / set_order : Number,
        Value / value / set_value : String,
        Text / text / set_text : opt String,
    }
}

tuple_definition! {
    ListBox => LIST_BOX, ListBoxTupleFields, ListBoxTuple {
        Property / property / set_property : String,
        Order / order / set_order : Number,
        Value / value / set_value : String,
        Text / text / set_text : opt String,
    }
}

tuple_definition! {
    ListView => LIST_VIEW, ListViewTupleFields, ListViewTuple {
        Property / property / set_property : String,
        Order / order / set_order : Number,
        Value / value / set_value : String,
        Text / text / set_text : opt String,
        BinaryRef / binary_ref / set_binary_ref : opt String,
    }
}

tuple_definition! {
    RadioButton => RADIO_BUTTON, RadioButtonTupleFields, RadioButtonTuple {
        Property / property / set_property : String,
        Order / order / set_order : Number,
        Value / value / set_value : String,
        X / x / set_x : Number,
        Y / y / set_y : Number,
        Width / width / set_width : Number,
        Height / height / set_height : Number,
        Text / text / set_text : opt String,
        Help / help / set_help : opt String,
    }
}

tuple_definition! {
    /// Named text style referenced from control text
    TextStyle => TEXT_STYLE, TextStyleTupleFields, TextStyleTuple {
        FaceName / face_name / set_face_name : String,
        Size / size / set_size : Number,
        Color / color / set_color : opt Number,
        Bold / bold / set_bold : Bool,
        Italic / italic / set_italic : Bool,
        Underline / underline / set_underline : Bool,
        Strike / strike / set_strike : Bool,
    }
}

tuple_definition! {
    /// Localizable UI string; the row id is the string key
    UIText => UI_TEXT, UITextTupleFields, UITextTuple {
        Text / text / set_text : opt String,
    }
}

tuple_definition! {
    /// Progress text shown while an action runs
    ActionText => ACTION_TEXT, ActionTextTupleFields, ActionTextTuple {
        Description / description / set_description : opt String,
        Template / template / set_template : opt String,
    }
}

tuple_definition! {
    Billboard => BILLBOARD, BillboardTupleFields, BillboardTuple {
        FeatureRef / feature_ref / set_feature_ref : String,
        Action / action / set_action : opt String,
        Ordering / ordering / set_ordering : opt Number,
    }
}

tuple_definition! {
    /// Formatted message for a runtime error number
    Error => ERROR, ErrorTupleFields, ErrorTuple {
        Message / message / set_message : opt String,
    }
}
